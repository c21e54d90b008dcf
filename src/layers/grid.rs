//! Coordinate grid overlays.

use crate::{constants::DEFAULT_PATH_COLOR, layers::LayerInfo, Options};

/// Default stroke width of adjustable grid lines.
pub const DEFAULT_GRID_WEIGHT: f64 = 1.0;

/// A coordinate grid drawn by the page-side grid plugin.
///
/// Parameters are forwarded untouched, so any option the plugin understands
/// (`interval`, `showOriginLabel`, `redraw`, ...) can be set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    parameters: Options,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: Options) -> Self {
        Self { parameters }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn parameters(&self) -> &Options {
        &self.parameters
    }

    pub fn to_info(&self) -> LayerInfo {
        LayerInfo::Grid {
            is_grid: Default::default(),
            options: self.parameters.clone(),
        }
    }
}

/// A grid whose spacing follows the zoom level; only its line color and
/// width are configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustableGrid {
    color: String,
    weight: f64,
}

impl Default for AdjustableGrid {
    fn default() -> Self {
        Self {
            color: DEFAULT_PATH_COLOR.to_string(),
            weight: DEFAULT_GRID_WEIGHT,
        }
    }
}

impl AdjustableGrid {
    pub fn new(color: impl Into<String>, weight: f64) -> Self {
        Self {
            color: color.into(),
            weight,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn to_info(&self) -> LayerInfo {
        LayerInfo::AdjustableGrid {
            is_adjustable_grid: Default::default(),
            color: self.color.clone(),
            width: self.weight,
        }
    }
}
