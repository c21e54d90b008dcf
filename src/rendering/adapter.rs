//! Replays an [`EmbedPayload`] against a [`MapBackend`].
//!
//! The whole payload is decoded before the backend sees anything, so a
//! malformed payload never leaves a half-drawn map behind. There is no retry
//! and no partial render.

use crate::{
    input::events::Events,
    layers::{
        marker::{Icon, Marker},
        LayerInfo,
    },
    rendering::{
        backend::{MapBackend, MarkerSpec},
        embed::{EmbedPayload, ATTR_EVENTS, ATTR_LAYERS, ATTR_MARKERS, ATTR_OPTIONS},
    },
    MapError, Options, Result,
};
use serde::de::DeserializeOwned;

pub struct RendererAdapter<B: MapBackend> {
    backend: B,
    default_icon: Icon,
}

/// A payload with every JSON member decoded
struct DecodedPayload {
    options: Options,
    layers: Vec<LayerInfo>,
    markers: Vec<Marker>,
    events: Events,
}

impl<B: MapBackend> RendererAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            default_icon: Icon::default_marker(),
        }
    }

    /// Replace the icon used for markers that do not carry their own
    pub fn with_default_icon(mut self, icon: Icon) -> Self {
        self.default_icon = icon;
        self
    }

    pub fn default_icon(&self) -> &Icon {
        &self.default_icon
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Draw one map: create it, add the background, the overlays in order,
    /// the markers in order and finally bind the map events.
    pub fn render(&mut self, payload: &EmbedPayload) -> Result<()> {
        let center = payload.center();
        if !center.is_finite() {
            return Err(MapError::MalformedPayload(format!(
                "center ({}, {}) is not finite",
                center.lat, center.lng
            )));
        }
        let decoded = decode(payload)?;

        #[cfg(feature = "debug")]
        log::debug!(
            "rendering map '{}': {} overlays, {} markers, {} events",
            payload.map_id,
            decoded.layers.len(),
            decoded.markers.len(),
            decoded.events.len()
        );

        self.backend
            .create_map(&payload.map_id, &decoded.options, center, payload.zoom)?;
        self.backend.add_tile_layer(&payload.background)?;

        for layer in &decoded.layers {
            self.backend.add_overlay(layer)?;
        }

        for marker in &decoded.markers {
            let resolved = self.resolve_marker(marker);
            self.backend.add_marker(&resolved)?;
        }

        for binding in &decoded.events {
            self.backend.bind_event(binding)?;
        }

        Ok(())
    }

    fn resolve_marker(&self, marker: &Marker) -> MarkerSpec {
        MarkerSpec {
            position: marker.position(),
            icon: marker
                .icon()
                .cloned()
                .unwrap_or_else(|| self.default_icon.clone()),
            options: marker.options().cloned().unwrap_or_default(),
            popup: marker.popup().cloned(),
            events: marker.events().clone(),
        }
    }
}

fn decode(payload: &EmbedPayload) -> Result<DecodedPayload> {
    let events = match &payload.events {
        Some(events) => parse(ATTR_EVENTS, events)?,
        None => Events::new(),
    };

    Ok(DecodedPayload {
        options: parse(ATTR_OPTIONS, &payload.options)?,
        layers: parse(ATTR_LAYERS, &payload.layers)?,
        markers: parse(ATTR_MARKERS, &payload.markers)?,
        events,
    })
}

fn parse<T: DeserializeOwned>(attribute: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        #[cfg(feature = "debug")]
        log::warn!("malformed {} payload: {}", attribute, e);
        MapError::MalformedPayload(format!("{}: {}", attribute, e))
    })
}
