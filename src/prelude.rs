//! Prelude module for common mapembed types and traits
//!
//! This module re-exports the most commonly used types and traits
//! for easy importing with `use mapembed::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::MapOptions,
    geo::{LatLng, LatLngBounds},
    map::Map,
};

pub use crate::layers::{
    grid::{AdjustableGrid, Grid},
    marker::{Icon, Marker},
    tile::TileLayer,
    vector::{Circle, PathStyle, Rectangle},
    Layer, LayerInfo,
};

pub use crate::data::geojson::GeoJsonLayer;

pub use crate::input::events::{EventBinding, Events};

pub use crate::ui::{
    legend::{LegendItem, LegendPosition},
    popup::Popup,
};

pub use crate::rendering::{
    adapter::RendererAdapter,
    backend::{MapBackend, MarkerSpec},
    context::{DrawCommand, RenderContext},
    embed::EmbedPayload,
};

pub use crate::{MapError, Options, Result};
