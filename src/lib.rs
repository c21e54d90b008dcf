//! # mapembed
//!
//! Server-side builder for interactive web maps rendered by Leaflet.
//!
//! A [`Map`] accumulates the configuration of a page's map (center, zoom,
//! background tiles, overlays, markers, legend and UI events) and serializes
//! it into the JSON blobs a browser-side renderer consumes. The crate never
//! draws anything itself: [`rendering::adapter::RendererAdapter`] replays an
//! embedded configuration against any [`rendering::backend::MapBackend`].

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::MapOptions,
    geo::{LatLng, LatLngBounds},
    map::Map,
};

pub use layers::{
    grid::{AdjustableGrid, Grid},
    marker::{Icon, Marker},
    tile::TileLayer,
    vector::{Circle, PathStyle, Rectangle},
    Layer, LayerInfo,
};

pub use data::geojson::GeoJsonLayer;

pub use input::events::{EventBinding, Events};

pub use ui::{
    legend::{Legend, LegendItem, LegendPosition},
    popup::Popup,
};

pub use rendering::{
    adapter::RendererAdapter,
    backend::{MapBackend, MarkerSpec},
    context::{DrawCommand, RenderContext},
    embed::EmbedPayload,
};

/// Free-form, insertion-ordered option map serialized verbatim to JSON.
pub type Options = serde_json::Map<String, serde_json::Value>;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Too many markers: {count} requested but a map holds at most {limit}. \
         Call Map::allow_large_set_of_markers() to add more than {limit} markers"
    )]
    CapacityExceeded { count: usize, limit: usize },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs an `env_logger` backend for the `log` facade.
///
/// Honors `RUST_LOG`; falls back to `info` for this crate when unset.
/// Calling it twice is harmless.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("mapembed=info"),
    )
    .try_init();
}
