use crate::{
    input::events::Events,
    layers::{merge_options, vector::PathStyle, LayerInfo},
    MapError, Options, Result,
};
use serde_json::{json, Value};
use std::str::FromStr;

/// GeoJSON object types accepted at the top level of a payload
const GEOJSON_TYPES: [&str; 9] = [
    "Feature",
    "FeatureCollection",
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// GeoJSON overlay. The payload is handed to Leaflet's `L.geoJSON` as is;
/// every feature is drawn with the layer's path style.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonLayer {
    json: Value,
    style: PathStyle,
    options: Options,
    events: Events,
}

impl GeoJsonLayer {
    /// Wraps an already-parsed GeoJSON value without inspecting it
    pub fn new(json: Value) -> Self {
        Self {
            json,
            style: PathStyle::default(),
            options: Options::new(),
            events: Events::new(),
        }
    }

    crate::impl_path_style!(style);
    crate::impl_layer_extras!(options, events);

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn to_info(&self) -> LayerInfo {
        let style = &self.style;
        let defaults = json!({
            "fillColor": style.fill_color,
            "color": style.color,
            "weight": style.weight,
            "opacity": style.opacity,
            "fillOpacity": style.fill_opacity,
        });

        LayerInfo::GeoJson {
            is_geo_json: Default::default(),
            json: self.json.clone(),
            options: merge_options(defaults, &self.options),
            events: self.events.clone(),
        }
    }
}

impl FromStr for GeoJsonLayer {
    type Err = MapError;

    /// Parses raw GeoJSON text, checking that it is an object with a known
    /// GeoJSON `type`
    fn from_str(geojson_str: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(geojson_str)
            .map_err(|e| MapError::InvalidArgument(format!("Invalid GeoJSON: {}", e)))?;

        match json.get("type").and_then(Value::as_str) {
            Some(kind) if GEOJSON_TYPES.contains(&kind) => Ok(Self::new(json)),
            Some(kind) => Err(MapError::InvalidArgument(format!(
                "Invalid GeoJSON: unknown type '{}'",
                kind
            ))),
            None => Err(MapError::InvalidArgument(
                "Invalid GeoJSON: missing 'type' member".to_string(),
            )),
        }
    }
}
