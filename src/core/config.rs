//! Typed Leaflet map options
//!
//! The map's option map is free-form, but the common interaction switches
//! are worth a typed front door. [`MapOptions`] serializes to exactly the
//! keys Leaflet's `L.map` expects and omits anything left unset, so Leaflet's
//! own defaults still apply.

use crate::{Options, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_wheel_zoom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_click_zoom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_zoom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_snap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_delta: Option<f64>,
}

impl MapOptions {
    /// Leaflet defaults: nothing is emitted
    pub fn interactive() -> Self {
        Self::default()
    }

    /// A picture-like map: no panning, zooming or zoom buttons
    pub fn static_view() -> Self {
        Self {
            dragging: Some(false),
            scroll_wheel_zoom: Some(false),
            double_click_zoom: Some(false),
            touch_zoom: Some(false),
            keyboard: Some(false),
            zoom_control: Some(false),
            ..Self::default()
        }
    }

    pub fn with_zoom_limits(mut self, min_zoom: Option<f64>, max_zoom: Option<f64>) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_zoom_behavior(mut self, snap: f64, delta: f64) -> Self {
        self.zoom_snap = Some(snap);
        self.zoom_delta = Some(delta);
        self
    }

    pub fn with_attribution_control(mut self, enabled: bool) -> Self {
        self.attribution_control = Some(enabled);
        self
    }

    /// The set options as an option map, in declaration order
    pub fn to_options(&self) -> Result<Options> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Ok(Options::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interactive_emits_nothing() {
        assert!(MapOptions::interactive().to_options().unwrap().is_empty());
    }

    #[test]
    fn test_static_view_options() {
        let options = MapOptions::static_view().with_zoom_limits(Some(4.0), None);

        assert_eq!(
            serde_json::Value::Object(options.to_options().unwrap()),
            json!({
                "dragging": false,
                "scrollWheelZoom": false,
                "doubleClickZoom": false,
                "touchZoom": false,
                "keyboard": false,
                "minZoom": 4.0,
                "zoomControl": false
            })
        );
    }

    #[test]
    fn test_options_deserialize_partially() {
        let options: MapOptions =
            serde_json::from_str(r#"{"zoomSnap": 0.5, "attributionControl": false}"#).unwrap();

        assert_eq!(options.zoom_snap, Some(0.5));
        assert_eq!(options.attribution_control, Some(false));
        assert_eq!(options.dragging, None);
    }

    #[test]
    fn test_zoom_behavior_and_attribution() {
        let options = MapOptions::interactive()
            .with_zoom_behavior(0.25, 0.5)
            .with_attribution_control(false);

        assert_eq!(
            serde_json::Value::Object(options.to_options().unwrap()),
            json!({"attributionControl": false, "zoomSnap": 0.25, "zoomDelta": 0.5})
        );
    }
}
