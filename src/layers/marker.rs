use crate::{
    constants::{
        MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_ICON_URL, MARKER_POPUP_ANCHOR,
        MARKER_SHADOW_SIZE, MARKER_SHADOW_URL, MARKER_TOOLTIP_ANCHOR,
    },
    core::geo::LatLng,
    input::events::Events,
    ui::popup::Popup,
    Options,
};
use serde::{Deserialize, Serialize};

/// Image-based marker icon, mirroring Leaflet's `L.icon` options.
/// Unset geometry is left to Leaflet's own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub icon_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_anchor: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_anchor: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_anchor: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_size: Option<[i32; 2]>,
}

fn pair((x, y): (i32, i32)) -> Option<[i32; 2]> {
    Some([x, y])
}

impl Icon {
    pub fn new(icon_url: impl Into<String>) -> Self {
        Self {
            icon_url: icon_url.into(),
            shadow_url: None,
            icon_size: None,
            icon_anchor: None,
            popup_anchor: None,
            tooltip_anchor: None,
            shadow_size: None,
        }
    }

    /// The pin drawn for markers that do not bring their own icon
    pub fn default_marker() -> Self {
        Self {
            icon_url: MARKER_ICON_URL.to_string(),
            shadow_url: Some(MARKER_SHADOW_URL.to_string()),
            icon_size: pair(MARKER_ICON_SIZE),
            icon_anchor: pair(MARKER_ICON_ANCHOR),
            popup_anchor: pair(MARKER_POPUP_ANCHOR),
            tooltip_anchor: pair(MARKER_TOOLTIP_ANCHOR),
            shadow_size: pair(MARKER_SHADOW_SIZE),
        }
    }

    pub fn with_shadow(mut self, shadow_url: impl Into<String>, shadow_size: [i32; 2]) -> Self {
        self.shadow_url = Some(shadow_url.into());
        self.shadow_size = Some(shadow_size);
        self
    }

    pub fn with_size(mut self, size: [i32; 2]) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn with_anchor(mut self, anchor: [i32; 2]) -> Self {
        self.icon_anchor = Some(anchor);
        self
    }

    pub fn with_popup_anchor(mut self, anchor: [i32; 2]) -> Self {
        self.popup_anchor = Some(anchor);
        self
    }

    pub fn with_tooltip_anchor(mut self, anchor: [i32; 2]) -> Self {
        self.tooltip_anchor = Some(anchor);
        self
    }
}

/// A point marker with optional icon, popup, Leaflet marker options
/// (`title`, `opacity`, `draggable`, ...) and event bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    lat: f64,
    lon: f64,
    #[serde(default)]
    icon: Option<Icon>,
    #[serde(default)]
    options: Option<Options>,
    #[serde(default)]
    popup: Option<Popup>,
    #[serde(default)]
    events: Events,
}

impl Marker {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            icon: None,
            options: None,
            popup: None,
            events: Events::new(),
        }
    }

    pub fn at(position: LatLng) -> Self {
        Self::new(position.lat, position.lng)
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options
            .get_or_insert_with(Options::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_event(
        mut self,
        name: impl Into<String>,
        action: impl Into<String>,
        params: Option<serde_json::Value>,
    ) -> Self {
        self.events.insert(name, action, params);
        self
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.lat = position.lat;
        self.lon = position.lng;
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn options(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    pub fn events(&self) -> &Events {
        &self.events
    }
}
