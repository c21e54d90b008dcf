use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude.
///
/// On the wire a coordinate is a `[lat, lon]` pair, which is what Leaflet
/// accepts wherever it expects a `LatLng`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Both components are finite numbers (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        point.to_array()
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every point, `None` for an empty slice
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Corner pair in the `[[south, west], [north, east]]` form `fitBounds` takes
    pub fn to_corners(&self) -> [[f64; 2]; 2] {
        [self.south_west.to_array(), self.north_east.to_array()]
    }
}
