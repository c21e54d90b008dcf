use crate::Options;
use serde::{Deserialize, Serialize};

/// Popup bound to a marker: HTML content plus Leaflet popup options
/// (`maxWidth`, `autoClose`, `className`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub content: String,
    #[serde(default)]
    pub options: Options,
}

impl Popup {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            options: Options::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_max_width(self, max_width: u32) -> Self {
        self.with_option("maxWidth", max_width)
    }

    pub fn with_auto_close(self, auto_close: bool) -> Self {
        self.with_option("autoClose", auto_close)
    }

    pub fn with_class_name(self, class_name: impl Into<String>) -> Self {
        let class_name: String = class_name.into();
        self.with_option("className", class_name)
    }
}
