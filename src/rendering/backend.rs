use crate::{
    core::geo::LatLng,
    input::events::{EventBinding, Events},
    layers::{marker::Icon, LayerInfo},
    ui::popup::Popup,
    Options, Result,
};

/// A marker resolved for drawing: the icon is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub icon: Icon,
    pub options: Options,
    pub popup: Option<Popup>,
    pub events: Events,
}

/// Drawing surface the renderer adapter drives.
///
/// Calls always arrive in the order map → background → overlays → markers →
/// events, and `create_map` is called exactly once per render.
pub trait MapBackend {
    fn create_map(&mut self, map_id: &str, options: &Options, center: LatLng, zoom: u32)
        -> Result<()>;

    fn add_tile_layer(&mut self, url_template: &str) -> Result<()>;

    fn add_overlay(&mut self, layer: &LayerInfo) -> Result<()>;

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<()>;

    /// Map-level events. Backends without an event system may ignore them.
    fn bind_event(&mut self, _binding: &EventBinding) -> Result<()> {
        Ok(())
    }
}

impl<B: MapBackend + ?Sized> MapBackend for &mut B {
    fn create_map(
        &mut self,
        map_id: &str,
        options: &Options,
        center: LatLng,
        zoom: u32,
    ) -> Result<()> {
        (**self).create_map(map_id, options, center, zoom)
    }

    fn add_tile_layer(&mut self, url_template: &str) -> Result<()> {
        (**self).add_tile_layer(url_template)
    }

    fn add_overlay(&mut self, layer: &LayerInfo) -> Result<()> {
        (**self).add_overlay(layer)
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<()> {
        (**self).add_marker(marker)
    }

    fn bind_event(&mut self, binding: &EventBinding) -> Result<()> {
        (**self).bind_event(binding)
    }
}
