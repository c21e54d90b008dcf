//! Legend state exposed to the page templates.
//!
//! Only the position and the item records live here; turning them into
//! markup is the templating layer's job.

use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One legend entry. Items are opaque to the map: whatever keys the
/// template expects (`label`, `color`, `icon`, ...) pass straight through.
pub type LegendItem = serde_json::Map<String, serde_json::Value>;

/// Corner of the map the legend is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::TopLeft => "top-left",
            LegendPosition::TopRight => "top-right",
            LegendPosition::BottomLeft => "bottom-left",
            LegendPosition::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegendPosition {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top-left" => Ok(LegendPosition::TopLeft),
            "top-right" => Ok(LegendPosition::TopRight),
            "bottom-left" => Ok(LegendPosition::BottomLeft),
            "bottom-right" => Ok(LegendPosition::BottomRight),
            other => Err(MapError::InvalidArgument(format!(
                "unknown legend position '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub visible: bool,
    pub position: LegendPosition,
    pub items: Vec<LegendItem>,
}

impl Legend {
    pub fn show(&mut self, position: LegendPosition) {
        self.visible = true;
        self.position = position;
    }

    /// Appends one item; an empty record is rejected
    pub fn push_item(&mut self, item: LegendItem) -> Result<()> {
        if item.is_empty() {
            return Err(MapError::InvalidArgument(
                "empty legend item: a legend item needs at least one field".to_string(),
            ));
        }
        self.items.push(item);
        Ok(())
    }

    /// Appends all items at once. Fails without appending anything if the
    /// collection or any of its items is empty.
    pub fn extend_items(&mut self, items: Vec<LegendItem>) -> Result<()> {
        if items.is_empty() {
            return Err(MapError::InvalidArgument(
                "empty legend items: at least one legend item is required".to_string(),
            ));
        }
        if let Some(index) = items.iter().position(|item| item.is_empty()) {
            return Err(MapError::InvalidArgument(format!(
                "empty legend item at index {}",
                index
            )));
        }
        self.items.extend(items);
        Ok(())
    }
}
