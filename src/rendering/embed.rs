//! The server → page wire contract.
//!
//! A page carries one map as attributes on its container element:
//!
//! ```html
//! <div id="map" data-lat="44.8" data-lon="-0.5" data-zoom="10"
//!      data-background="https://..." data-markers="[...]"
//!      data-options="{...}" data-layers="[...]" data-events="[...]"></div>
//! ```
//!
//! `data-events` is left out when the map has no events. Escaping the values
//! for HTML is the template's job.

use crate::{core::geo::LatLng, MapError, Result};
use serde::{Deserialize, Serialize};

pub const ATTR_ID: &str = "id";
pub const ATTR_LAT: &str = "data-lat";
pub const ATTR_LON: &str = "data-lon";
pub const ATTR_ZOOM: &str = "data-zoom";
pub const ATTR_BACKGROUND: &str = "data-background";
pub const ATTR_MARKERS: &str = "data-markers";
pub const ATTR_OPTIONS: &str = "data-options";
pub const ATTR_LAYERS: &str = "data-layers";
pub const ATTR_EVENTS: &str = "data-events";

/// Everything a page needs to draw one map. The JSON members hold
/// already-encoded text, exactly as it lands in the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedPayload {
    pub map_id: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u32,
    pub background: String,
    pub markers: String,
    pub options: String,
    pub layers: String,
    #[serde(default)]
    pub events: Option<String>,
}

impl EmbedPayload {
    pub fn center(&self) -> LatLng {
        LatLng::new(self.center_lat, self.center_lon)
    }

    /// Attribute name/value pairs for the map container, in a stable order
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![
            (ATTR_ID, self.map_id.clone()),
            (ATTR_LAT, self.center_lat.to_string()),
            (ATTR_LON, self.center_lon.to_string()),
            (ATTR_ZOOM, self.zoom.to_string()),
            (ATTR_BACKGROUND, self.background.clone()),
            (ATTR_MARKERS, self.markers.clone()),
            (ATTR_OPTIONS, self.options.clone()),
            (ATTR_LAYERS, self.layers.clone()),
        ];
        if let Some(events) = &self.events {
            attributes.push((ATTR_EVENTS, events.clone()));
        }
        attributes
    }

    /// Rebuilds a payload from the container's attributes.
    ///
    /// Unknown attributes are ignored. `data-layers` defaults to an empty
    /// list and `data-events` to no events; everything else is required.
    /// Only the scalars are checked here, JSON members are parsed by the
    /// renderer.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let attributes: Vec<(&str, &str)> = attributes.into_iter().collect();
        let find = |name: &str| {
            attributes
                .iter()
                .rev()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                MapError::MalformedPayload(format!("missing attribute '{}'", name))
            })
        };

        let map_id = require(ATTR_ID)?;
        if map_id.is_empty() {
            return Err(MapError::MalformedPayload("empty map id".to_string()));
        }

        Ok(Self {
            map_id: map_id.to_string(),
            center_lat: parse_coordinate(ATTR_LAT, require(ATTR_LAT)?)?,
            center_lon: parse_coordinate(ATTR_LON, require(ATTR_LON)?)?,
            zoom: require(ATTR_ZOOM)?.trim().parse().map_err(|e| {
                MapError::MalformedPayload(format!("{}: {}", ATTR_ZOOM, e))
            })?,
            background: require(ATTR_BACKGROUND)?.to_string(),
            markers: require(ATTR_MARKERS)?.to_string(),
            options: require(ATTR_OPTIONS)?.to_string(),
            layers: find(ATTR_LAYERS).unwrap_or("[]").to_string(),
            events: find(ATTR_EVENTS).map(str::to_string),
        })
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|e| MapError::MalformedPayload(format!("{}: {}", name, e)))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(MapError::MalformedPayload(format!(
            "{}: '{}' is not a finite number",
            name, value
        )))
    }
}
