//! Map layers and their wire representation.
//!
//! A map owns one background [`TileLayer`] followed by any number of
//! overlays. Each variant of [`Layer`] knows how to describe itself as a
//! [`LayerInfo`], the record the page-side renderer reads.

pub mod grid;
pub mod macros;
pub mod marker;
pub mod tile;
pub mod vector;

use crate::{
    core::geo::LatLng, data::geojson::GeoJsonLayer, input::events::Events, MapError, Options,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use grid::{AdjustableGrid, Grid};
pub use marker::{Icon, Marker};
pub use tile::TileLayer;
pub use vector::{Circle, PathStyle, Rectangle};

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Tile(TileLayer),
    GeoJson(GeoJsonLayer),
    Circle(Circle),
    Rectangle(Rectangle),
    Grid(Grid),
    AdjustableGrid(AdjustableGrid),
}

impl Layer {
    /// Wire record for this layer
    pub fn info(&self) -> LayerInfo {
        match self {
            Layer::Tile(layer) => layer.to_info(),
            Layer::GeoJson(layer) => layer.to_info(),
            Layer::Circle(layer) => layer.to_info(),
            Layer::Rectangle(layer) => layer.to_info(),
            Layer::Grid(layer) => layer.to_info(),
            Layer::AdjustableGrid(layer) => layer.to_info(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Layer::Tile(_) => "tile",
            Layer::GeoJson(_) => "geojson",
            Layer::Circle(_) => "circle",
            Layer::Rectangle(_) => "rectangle",
            Layer::Grid(_) => "grid",
            Layer::AdjustableGrid(_) => "adjustable-grid",
        }
    }

    /// Rejects geometry JSON cannot carry or Leaflet cannot draw: NaN or
    /// infinite coordinates, negative or non-finite radius and width
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Layer::Circle(circle) => {
                check_point("circle center", circle.center())?;
                check_length("circle radius", circle.radius())
            }
            Layer::Rectangle(rectangle) => {
                check_point("rectangle corner", rectangle.first_point())?;
                check_point("rectangle corner", rectangle.second_point())
            }
            Layer::AdjustableGrid(grid) => check_length("grid width", grid.weight()),
            Layer::Tile(_) | Layer::GeoJson(_) | Layer::Grid(_) => Ok(()),
        }
    }

    /// Event bindings, for the variants that carry any
    pub fn events(&self) -> Option<&Events> {
        match self {
            Layer::Tile(layer) => Some(layer.events()),
            Layer::GeoJson(layer) => Some(layer.events()),
            Layer::Circle(layer) => Some(layer.events()),
            Layer::Rectangle(layer) => Some(layer.events()),
            Layer::Grid(_) | Layer::AdjustableGrid(_) => None,
        }
    }
}

impl From<TileLayer> for Layer {
    fn from(layer: TileLayer) -> Self {
        Layer::Tile(layer)
    }
}

impl From<GeoJsonLayer> for Layer {
    fn from(layer: GeoJsonLayer) -> Self {
        Layer::GeoJson(layer)
    }
}

impl From<Circle> for Layer {
    fn from(layer: Circle) -> Self {
        Layer::Circle(layer)
    }
}

impl From<Rectangle> for Layer {
    fn from(layer: Rectangle) -> Self {
        Layer::Rectangle(layer)
    }
}

impl From<Grid> for Layer {
    fn from(layer: Grid) -> Self {
        Layer::Grid(layer)
    }
}

impl From<AdjustableGrid> for Layer {
    fn from(layer: AdjustableGrid) -> Self {
        Layer::AdjustableGrid(layer)
    }
}

/// A boolean discriminator fixed to `V`.
///
/// Serializes as the literal `V` and refuses any other value when
/// deserializing, which lets the untagged [`LayerInfo`] tell its variants
/// apart by their `isCircle`/`isGrid`/... flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag<const V: bool>;

impl<const V: bool> Serialize for Flag<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(V)
    }
}

impl<'de, const V: bool> Deserialize<'de> for Flag<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? == V {
            Ok(Flag)
        } else {
            Err(de::Error::custom(format_args!("expected `{}`", V)))
        }
    }
}

/// What the renderer receives for one overlay.
///
/// Variants are listed in matching order: deserialization picks the first
/// whose discriminator flag and fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerInfo {
    #[serde(rename_all = "camelCase")]
    GeoJson {
        is_geo_json: Flag<true>,
        json: serde_json::Value,
        options: Options,
        #[serde(default)]
        events: Events,
    },
    #[serde(rename_all = "camelCase")]
    Circle {
        is_circle: Flag<true>,
        center: LatLng,
        options: Options,
        #[serde(default)]
        events: Events,
    },
    #[serde(rename_all = "camelCase")]
    Rectangle {
        is_rectangle: Flag<true>,
        points: [LatLng; 2],
        options: Options,
        #[serde(default)]
        events: Events,
    },
    #[serde(rename_all = "camelCase")]
    Grid {
        is_grid: Flag<true>,
        options: Options,
    },
    #[serde(rename_all = "camelCase")]
    AdjustableGrid {
        is_adjustable_grid: Flag<true>,
        color: String,
        width: f64,
    },
    #[serde(rename_all = "camelCase")]
    Plain {
        background: String,
        options: Options,
        is_geo_json: Flag<false>,
        #[serde(default)]
        events: Events,
    },
}

impl LayerInfo {
    pub fn kind(&self) -> &'static str {
        match self {
            LayerInfo::GeoJson { .. } => "geojson",
            LayerInfo::Circle { .. } => "circle",
            LayerInfo::Rectangle { .. } => "rectangle",
            LayerInfo::Grid { .. } => "grid",
            LayerInfo::AdjustableGrid { .. } => "adjustable-grid",
            LayerInfo::Plain { .. } => "tile",
        }
    }
}

/// Styling defaults (a JSON object) with the layer's extra options laid on
/// top; on a key collision the extra option wins.
pub(crate) fn merge_options(defaults: serde_json::Value, extra: &Options) -> Options {
    let mut options = match defaults {
        serde_json::Value::Object(map) => map,
        _ => Options::new(),
    };
    for (key, value) in extra {
        options.insert(key.clone(), value.clone());
    }
    options
}

fn check_point(what: &str, point: LatLng) -> crate::Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(MapError::InvalidArgument(format!(
            "{} ({}, {}) must be finite",
            what, point.lat, point.lng
        )))
    }
}

fn check_length(what: &str, value: f64) -> crate::Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MapError::InvalidArgument(format!(
            "{} must be a finite, non-negative number, got {}",
            what, value
        )))
    }
}
