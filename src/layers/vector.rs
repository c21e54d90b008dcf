use crate::{
    constants::{DEFAULT_FILL_OPACITY, DEFAULT_PATH_COLOR, DEFAULT_PATH_OPACITY, DEFAULT_PATH_WEIGHT},
    core::geo::LatLng,
    input::events::Events,
    layers::{merge_options, LayerInfo},
    Options,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Stroke and fill styling shared by every vector overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// Stroke color
    pub color: String,
    /// Stroke width in pixels
    pub weight: f64,
    /// Stroke opacity (0.0 to 1.0)
    pub opacity: f64,
    /// Fill color
    pub fill_color: String,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_PATH_COLOR.to_string(),
            weight: DEFAULT_PATH_WEIGHT,
            opacity: DEFAULT_PATH_OPACITY,
            fill_color: DEFAULT_PATH_COLOR.to_string(),
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }
}

/// A circle of fixed radius (meters) around a point
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: LatLng,
    radius: f64,
    style: PathStyle,
    options: Options,
    events: Events,
}

impl Circle {
    pub fn new(center: impl Into<LatLng>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
            style: PathStyle::default(),
            options: Options::new(),
            events: Events::new(),
        }
    }

    crate::impl_path_style!(style);
    crate::impl_layer_extras!(options, events);

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn to_info(&self) -> LayerInfo {
        let style = &self.style;
        let defaults = json!({
            "radius": self.radius,
            "color": style.color,
            "weight": style.weight,
            "opacity": style.opacity,
            "fillColor": style.fill_color,
            "fillOpacity": style.fill_opacity,
        });

        LayerInfo::Circle {
            is_circle: Default::default(),
            center: self.center,
            options: merge_options(defaults, &self.options),
            events: self.events.clone(),
        }
    }
}

/// An axis-aligned rectangle given by two opposite corners
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    first_point: LatLng,
    second_point: LatLng,
    style: PathStyle,
    options: Options,
    events: Events,
}

impl Rectangle {
    pub fn new(first_point: impl Into<LatLng>, second_point: impl Into<LatLng>) -> Self {
        Self {
            first_point: first_point.into(),
            second_point: second_point.into(),
            style: PathStyle::default(),
            options: Options::new(),
            events: Events::new(),
        }
    }

    crate::impl_path_style!(style);
    crate::impl_layer_extras!(options, events);

    pub fn first_point(&self) -> LatLng {
        self.first_point
    }

    pub fn second_point(&self) -> LatLng {
        self.second_point
    }

    pub fn to_info(&self) -> LayerInfo {
        let style = &self.style;
        let defaults = json!({
            "color": style.color,
            "weight": style.weight,
            "opacity": style.opacity,
            "fillColor": style.fill_color,
            "fillOpacity": style.fill_opacity,
        });

        LayerInfo::Rectangle {
            is_rectangle: Default::default(),
            points: [self.first_point, self.second_point],
            options: merge_options(defaults, &self.options),
            events: self.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_leaflet() {
        let style = PathStyle::default();
        assert_eq!(style.color, "#3388ff");
        assert_eq!(style.weight, 3.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_color, "#3388ff");
        assert_eq!(style.fill_opacity, 0.2);
    }

    #[test]
    fn test_circle_info() {
        let circle = Circle::new([1.0, 1.0], 10.0).with_color("red");

        assert_eq!(
            serde_json::to_value(circle.to_info()).unwrap(),
            json!({
                "isCircle": true,
                "center": [1.0, 1.0],
                "options": {
                    "radius": 10.0,
                    "color": "red",
                    "weight": 3.0,
                    "opacity": 1.0,
                    "fillColor": "#3388ff",
                    "fillOpacity": 0.2
                },
                "events": null
            })
        );
    }

    #[test]
    fn test_extra_options_override_style() {
        let circle = Circle::new((48.85, 2.35), 500.0)
            .with_fill_opacity(0.5)
            .with_option("fillOpacity", 0.9)
            .with_option("dashArray", "4 2");

        let info = serde_json::to_value(circle.to_info()).unwrap();
        assert_eq!(info["options"]["fillOpacity"], 0.9);
        assert_eq!(info["options"]["dashArray"], "4 2");

        let keys: Vec<_> = info["options"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["radius", "color", "weight", "opacity", "fillColor", "fillOpacity", "dashArray"]
        );
    }

    #[test]
    fn test_rectangle_info() {
        let rectangle = Rectangle::new([44.0, -1.0], [45.0, 0.0])
            .with_weight(1.0)
            .with_event("click", "selectZone", Some(json!({"zone": 4})));

        assert_eq!(
            serde_json::to_value(rectangle.to_info()).unwrap(),
            json!({
                "isRectangle": true,
                "points": [[44.0, -1.0], [45.0, 0.0]],
                "options": {
                    "color": "#3388ff",
                    "weight": 1.0,
                    "opacity": 1.0,
                    "fillColor": "#3388ff",
                    "fillOpacity": 0.2
                },
                "events": [{"name": "click", "action": "selectZone", "params": {"zone": 4}}]
            })
        );
    }
}
