//! Map builder for fluent API configuration
//!
//! This module provides a MapBuilder that allows for fluent configuration
//! of map instances. Values are only validated when [`MapBuilder::build`]
//! runs, so a builder can be assembled from untrusted input and checked once.

use crate::{
    constants::{DEFAULT_LAT, DEFAULT_LON, DEFAULT_ZOOM},
    core::{config::MapOptions, map::Map},
    ui::legend::LegendPosition,
    Result,
};

/// Builder for creating and configuring Map instances
#[derive(Debug, Clone)]
pub struct MapBuilder {
    center_lat: f64,
    center_lon: f64,
    zoom: f64,
    background: Option<String>,
    title: Option<String>,
    map_options: Option<MapOptions>,
    legend: Option<LegendPosition>,
    scale: bool,
    allow_large_set_of_markers: bool,
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self {
            center_lat: DEFAULT_LAT,
            center_lon: DEFAULT_LON,
            zoom: f64::from(DEFAULT_ZOOM),
            background: None,
            title: None,
            map_options: None,
            legend: None,
            scale: true,
            allow_large_set_of_markers: false,
        }
    }

    /// Set the initial center
    pub fn center(mut self, lat: f64, lon: f64) -> Self {
        self.center_lat = lat;
        self.center_lon = lon;
        self
    }

    /// Set the initial zoom level
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the background tile URL template
    pub fn background(mut self, url: impl Into<String>) -> Self {
        self.background = Some(url.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set typed Leaflet map options
    pub fn map_options(mut self, options: MapOptions) -> Self {
        self.map_options = Some(options);
        self
    }

    /// Show a legend in the given corner
    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = Some(position);
        self
    }

    /// Hide the scale control
    pub fn without_scale(mut self) -> Self {
        self.scale = false;
        self
    }

    /// Lift the marker ceiling
    pub fn allow_large_set_of_markers(mut self) -> Self {
        self.allow_large_set_of_markers = true;
        self
    }

    /// Build the map
    pub fn build(self) -> Result<Map> {
        let mut map = match self.background {
            Some(url) => Map::with_background(self.center_lat, self.center_lon, self.zoom, url)?,
            None => Map::new(self.center_lat, self.center_lon, self.zoom)?,
        };

        if let Some(options) = &self.map_options {
            map.apply_map_options(options)?;
        }
        if !self.scale {
            map.remove_scale();
        }
        if self.allow_large_set_of_markers {
            map.allow_large_set_of_markers();
        }
        if let Some(position) = self.legend {
            map.add_legend(position);
        }
        if let Some(title) = self.title {
            map.set_title(title);
        }

        Ok(map)
    }
}
