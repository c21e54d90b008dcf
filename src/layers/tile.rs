use crate::{input::events::Events, layers::LayerInfo, Options};

/// OpenStreetMap's public tile server.
pub const OPENSTREETMAP_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Esri World Imagery tiles.
pub const SATELLITE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

/// A raster tile layer identified by its URL template.
///
/// Used as the map background, but a plain tile layer can also be stacked as
/// an overlay (labels, hillshading, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileLayer {
    url: String,
    options: Options,
    events: Events,
}

impl TileLayer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: Options::new(),
            events: Events::new(),
        }
    }

    /// A layer with no tiles; the map shows an empty background
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap() -> Self {
        Self::new(OPENSTREETMAP_URL).with_option("attribution", "© OpenStreetMap contributors")
    }

    /// Create a tile layer for satellite imagery
    pub fn satellite() -> Self {
        Self::new(SATELLITE_URL).with_option(
            "attribution",
            "© Esri, Maxar, GeoEye, Earthstar Geographics, CNES/Airbus DS, USDA, USGS, AeroGRID, IGN, and the GIS User Community",
        )
    }

    crate::impl_layer_extras!(options, events);

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    pub fn to_info(&self) -> LayerInfo {
        LayerInfo::Plain {
            background: self.url.clone(),
            options: self.options.clone(),
            is_geo_json: Default::default(),
            events: self.events.clone(),
        }
    }
}
