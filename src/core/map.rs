use crate::{
    constants::{DEFAULT_LAT, DEFAULT_LON, DEFAULT_ZOOM, MAX_MARKERS_ON_MAP, SCALE_OPTION},
    core::{
        config::MapOptions,
        geo::{LatLng, LatLngBounds},
    },
    input::events::Events,
    layers::{marker::Marker, tile::TileLayer, Layer, LayerInfo},
    rendering::embed::EmbedPayload,
    ui::legend::{Legend, LegendItem, LegendPosition},
    MapError, Options, Result,
};

/// Configuration of one page's map.
///
/// Built up during a request, serialized for the page, then dropped.
/// Serializing never freezes the map: every `*_json` call reflects the
/// state at call time. Mutators that fail leave the map untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    center: LatLng,
    zoom: u32,
    /// Position 0 of the layer stack
    background: TileLayer,
    /// Positions 1.. of the layer stack
    overlays: Vec<Layer>,
    markers: Vec<Marker>,
    options: Options,
    events: Events,
    legend: Legend,
    title: Option<String>,
    has_scale: bool,
    allow_large_set_of_markers: bool,
}

impl Default for Map {
    fn default() -> Self {
        Self::from_parts(
            LatLng::new(DEFAULT_LAT, DEFAULT_LON),
            DEFAULT_ZOOM,
            TileLayer::empty(),
        )
    }
}

impl Map {
    /// Creates a map with an empty background.
    ///
    /// Fails with [`MapError::InvalidArgument`] when a coordinate is NaN or
    /// infinite, or when `zoom` is not a non-negative integer.
    pub fn new(center_lat: f64, center_lon: f64, zoom: f64) -> Result<Self> {
        Self::with_background(center_lat, center_lon, zoom, "")
    }

    /// Creates a map whose background tiles come from `background`
    pub fn with_background(
        center_lat: f64,
        center_lon: f64,
        zoom: f64,
        background: impl Into<String>,
    ) -> Result<Self> {
        let center = LatLng::new(
            validate_coordinate("latitude", center_lat)?,
            validate_coordinate("longitude", center_lon)?,
        );
        let zoom = validate_zoom(zoom)?;
        Ok(Self::from_parts(center, zoom, TileLayer::new(background)))
    }

    fn from_parts(center: LatLng, zoom: u32, background: TileLayer) -> Self {
        let mut map = Self {
            center,
            zoom,
            background,
            overlays: Vec::new(),
            markers: Vec::new(),
            options: Options::new(),
            events: Events::new(),
            legend: Legend::default(),
            title: None,
            has_scale: true,
            allow_large_set_of_markers: false,
        };
        map.sync_scale_option();
        map
    }

    /// Center and zoom are set to usable values
    pub fn is_ready(&self) -> bool {
        self.center.is_finite()
    }

    // --- View ---

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn center_latitude(&self) -> f64 {
        self.center.lat
    }

    pub fn center_longitude(&self) -> f64 {
        self.center.lng
    }

    pub fn zoom_level(&self) -> u32 {
        self.zoom
    }

    pub fn set_center(&mut self, center_lat: f64, center_lon: f64) -> Result<()> {
        let lat = validate_coordinate("latitude", center_lat)?;
        let lng = validate_coordinate("longitude", center_lon)?;
        self.center = LatLng::new(lat, lng);
        Ok(())
    }

    pub fn set_center_latitude(&mut self, center_lat: f64) -> Result<()> {
        self.center.lat = validate_coordinate("latitude", center_lat)?;
        Ok(())
    }

    pub fn set_center_longitude(&mut self, center_lon: f64) -> Result<()> {
        self.center.lng = validate_coordinate("longitude", center_lon)?;
        Ok(())
    }

    pub fn set_zoom_level(&mut self, zoom: f64) -> Result<()> {
        self.zoom = validate_zoom(zoom)?;
        Ok(())
    }

    // --- Layers ---

    pub fn background(&self) -> &TileLayer {
        &self.background
    }

    /// Replaces the background layer, dropping any styling or events the
    /// previous one carried
    pub fn set_background(&mut self, url: impl Into<String>) {
        self.background = TileLayer::new(url);

        #[cfg(feature = "debug")]
        log::debug!("background set to '{}'", self.background.url());
    }

    pub fn remove_background(&mut self) {
        self.set_background("");
    }

    /// Appends an overlay above the background and the previous overlays.
    ///
    /// Fails with [`MapError::InvalidArgument`] when the layer's geometry is
    /// not finite; the map is left untouched.
    pub fn add_layer(&mut self, layer: impl Into<Layer>) -> Result<()> {
        let layer = layer.into();
        layer.validate()?;
        self.overlays.push(layer);
        Ok(())
    }

    pub fn overlays(&self) -> &[Layer] {
        &self.overlays
    }

    /// Number of layers including the background
    pub fn layer_count(&self) -> usize {
        self.overlays.len() + 1
    }

    /// Wire records for every overlay; the background travels separately
    pub fn layers_info(&self) -> Vec<LayerInfo> {
        self.overlays.iter().map(Layer::info).collect()
    }

    pub fn layers_info_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.layers_info())?)
    }

    // --- Markers ---

    /// Lifts the marker ceiling for this map
    pub fn allow_large_set_of_markers(&mut self) {
        self.allow_large_set_of_markers = true;
    }

    pub fn allows_large_set_of_markers(&self) -> bool {
        self.allow_large_set_of_markers
    }

    fn check_marker_capacity(&self, count: usize) -> Result<()> {
        if count > MAX_MARKERS_ON_MAP && !self.allow_large_set_of_markers {
            #[cfg(feature = "debug")]
            log::debug!(
                "rejecting {} markers, limit is {}",
                count,
                MAX_MARKERS_ON_MAP
            );
            return Err(MapError::CapacityExceeded {
                count,
                limit: MAX_MARKERS_ON_MAP,
            });
        }
        Ok(())
    }

    pub fn add_marker(&mut self, marker: Marker) -> Result<()> {
        validate_marker(&marker)?;
        self.check_marker_capacity(self.markers.len() + 1)?;
        self.markers.push(marker);
        Ok(())
    }

    /// Appends several markers, all or none
    pub fn extend_markers(&mut self, markers: Vec<Marker>) -> Result<()> {
        markers.iter().try_for_each(validate_marker)?;
        self.check_marker_capacity(self.markers.len() + markers.len())?;
        self.markers.extend(markers);
        Ok(())
    }

    /// Replaces every marker; on failure the current markers are kept
    pub fn set_markers(&mut self, markers: Vec<Marker>) -> Result<()> {
        markers.iter().try_for_each(validate_marker)?;
        self.check_marker_capacity(markers.len())?;
        self.markers = markers;
        Ok(())
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn markers_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.markers)?)
    }

    /// `[lat, lon]` of every marker, in insertion order
    pub fn points_from_markers(&self) -> Vec<[f64; 2]> {
        self.markers
            .iter()
            .map(|marker| [marker.latitude(), marker.longitude()])
            .collect()
    }

    /// Box enclosing every marker, for fitting the view to them
    pub fn markers_bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = self.markers.iter().map(Marker::position).collect();
        LatLngBounds::from_points(&points)
    }

    // --- Options ---

    /// Replaces the whole option map, `scale` included
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.options.insert(key.into(), value.into());
    }

    /// Merges typed Leaflet options over the current ones
    pub fn apply_map_options(&mut self, map_options: &MapOptions) -> Result<()> {
        let options = map_options.to_options()?;
        self.options.extend(options);
        Ok(())
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.options)?)
    }

    pub fn has_scale(&self) -> bool {
        self.has_scale
    }

    pub fn remove_scale(&mut self) {
        self.has_scale = false;
        self.sync_scale_option();
    }

    fn sync_scale_option(&mut self) {
        self.options
            .insert(SCALE_OPTION.to_string(), self.has_scale.into());
    }

    // --- Events ---

    /// Binds a page-side action to a map event; re-binding a name replaces it
    pub fn add_event(
        &mut self,
        name: impl Into<String>,
        action: impl Into<String>,
        params: Option<serde_json::Value>,
    ) {
        self.events.insert(name, action, params);
    }

    pub fn set_events(&mut self, events: Events) {
        self.events = events;
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// `None` when no event was bound, a JSON array otherwise
    pub fn events_json(&self) -> Result<Option<String>> {
        match self.events.records() {
            Some(records) => Ok(Some(serde_json::to_string(records)?)),
            None => Ok(None),
        }
    }

    // --- Legend & title ---

    pub fn add_legend(&mut self, position: LegendPosition) {
        self.legend.show(position);
    }

    pub fn has_legend(&self) -> bool {
        self.legend.visible
    }

    pub fn legend_position(&self) -> LegendPosition {
        self.legend.position
    }

    pub fn add_legend_items(&mut self, items: Vec<LegendItem>) -> Result<()> {
        self.legend.extend_items(items)
    }

    pub fn add_legend_item(&mut self, item: LegendItem) -> Result<()> {
        self.legend.push_item(item)
    }

    /// `None` until at least one item was added
    pub fn legend_items(&self) -> Option<&[LegendItem]> {
        if self.legend.items.is_empty() {
            None
        } else {
            Some(&self.legend.items)
        }
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    // --- Page embedding ---

    /// Snapshot of everything the page-side renderer needs for the map
    /// container identified by `map_id`
    pub fn embed(&self, map_id: impl Into<String>) -> Result<EmbedPayload> {
        let map_id = map_id.into();
        if map_id.is_empty() {
            return Err(MapError::InvalidArgument(
                "map id must not be empty".to_string(),
            ));
        }

        Ok(EmbedPayload {
            map_id,
            center_lat: self.center.lat,
            center_lon: self.center.lng,
            zoom: self.zoom,
            background: self.background.url().to_string(),
            markers: self.markers_json()?,
            options: self.options_json()?,
            layers: self.layers_info_json()?,
            events: self.events_json()?,
        })
    }
}

fn validate_coordinate(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MapError::InvalidArgument(format!(
            "center {} must be a finite number, got {}",
            name, value
        )))
    }
}

fn validate_marker(marker: &Marker) -> Result<()> {
    if marker.position().is_finite() {
        Ok(())
    } else {
        Err(MapError::InvalidArgument(format!(
            "marker position ({}, {}) must be finite",
            marker.latitude(),
            marker.longitude()
        )))
    }
}

fn validate_zoom(zoom: f64) -> Result<u32> {
    if zoom.is_finite() && zoom >= 0.0 && zoom.fract() == 0.0 && zoom <= u32::MAX as f64 {
        Ok(zoom as u32)
    } else {
        Err(MapError::InvalidArgument(format!(
            "zoom level must be a non-negative integer, got {}",
            zoom
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_map() {
        let map = Map::default();
        assert_eq!(map.center(), LatLng::new(DEFAULT_LAT, DEFAULT_LON));
        assert_eq!(map.zoom_level(), DEFAULT_ZOOM);
        assert!(map.background().is_empty());
        assert_eq!(map.layer_count(), 1);
        assert_eq!(map.options_json().unwrap(), r#"{"scale":true}"#);
        assert!(map.is_ready());
    }

    #[test]
    fn test_invalid_view_rejected() {
        assert!(matches!(Map::new(f64::NAN, 0.0, 3.0), Err(MapError::InvalidArgument(_))));
        assert!(matches!(Map::new(0.0, f64::INFINITY, 3.0), Err(MapError::InvalidArgument(_))));
        assert!(matches!(Map::new(0.0, 0.0, -1.0), Err(MapError::InvalidArgument(_))));
        assert!(matches!(Map::new(0.0, 0.0, 2.5), Err(MapError::InvalidArgument(_))));
        assert!(matches!(Map::new(0.0, 0.0, f64::NAN), Err(MapError::InvalidArgument(_))));
    }

    #[test]
    fn test_out_of_range_coordinates_are_accepted() {
        let map = Map::new(120.0, -400.0, 30.0).unwrap();
        assert!(map.is_ready());
        assert_eq!(map.zoom_level(), 30);
    }

    #[test]
    fn test_failed_setter_keeps_state() {
        let mut map = Map::new(1.0, 2.0, 3.0).unwrap();

        assert!(map.set_center(f64::NAN, 5.0).is_err());
        assert!(map.set_zoom_level(-2.0).is_err());
        assert_eq!(map.center(), LatLng::new(1.0, 2.0));
        assert_eq!(map.zoom_level(), 3);

        map.set_center_latitude(7.0).unwrap();
        map.set_center_longitude(8.0).unwrap();
        assert_eq!(map.center(), LatLng::new(7.0, 8.0));
    }

    #[test]
    fn test_remove_scale_resyncs_option() {
        let mut map = Map::default();
        map.set_option("zoomControl", false);
        map.remove_scale();

        assert!(!map.has_scale());
        assert_eq!(
            serde_json::Value::Object(map.options().clone()),
            json!({"scale": false, "zoomControl": false})
        );
    }

    #[test]
    fn test_apply_map_options_keeps_other_keys() {
        let mut map = Map::default();
        map.apply_map_options(&MapOptions::static_view()).unwrap();

        assert_eq!(map.options()["scale"], true);
        assert_eq!(map.options()["dragging"], false);
    }

    #[test]
    fn test_markers_bounds() {
        let mut map = Map::default();
        assert!(map.markers_bounds().is_none());

        map.add_marker(Marker::new(1.0, 5.0)).unwrap();
        map.add_marker(Marker::new(3.0, -1.0)).unwrap();

        let bounds = map.markers_bounds().unwrap();
        assert_eq!(bounds.to_corners(), [[1.0, -1.0], [3.0, 5.0]]);
    }

    #[test]
    fn test_embed_requires_map_id() {
        assert!(matches!(Map::default().embed(""), Err(MapError::InvalidArgument(_))));
    }
}
