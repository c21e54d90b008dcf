use crate::{
    core::geo::LatLng,
    input::events::EventBinding,
    layers::LayerInfo,
    rendering::backend::{MapBackend, MarkerSpec},
    MapError, Options, Result,
};

/// In-memory render context: every backend call is queued as a
/// [`DrawCommand`] instead of being drawn. Useful for tests and for hosts
/// that translate the queue into their own drawing calls.
#[derive(Debug, Default)]
pub struct RenderContext {
    /// Drawing commands, in the order they were issued
    pub drawing_queue: Vec<DrawCommand>,
}

/// Commands that can be issued to the render context
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    CreateMap {
        map_id: String,
        options: Options,
        center: LatLng,
        zoom: u32,
    },
    TileLayer {
        url_template: String,
    },
    Overlay(LayerInfo),
    Marker(MarkerSpec),
    Event(EventBinding),
}

impl DrawCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::CreateMap { .. } => "create_map",
            DrawCommand::TileLayer { .. } => "tile_layer",
            DrawCommand::Overlay(_) => "overlay",
            DrawCommand::Marker(_) => "marker",
            DrawCommand::Event(_) => "event",
        }
    }
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current drawing queue
    pub fn get_drawing_queue(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }

    pub fn has_map(&self) -> bool {
        matches!(self.drawing_queue.first(), Some(DrawCommand::CreateMap { .. }))
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerSpec> {
        self.drawing_queue.iter().filter_map(|command| match command {
            DrawCommand::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    /// Clear the drawing queue
    pub fn clear_queue(&mut self) {
        self.drawing_queue.clear();
    }

    fn ensure_map(&self, what: &str) -> Result<()> {
        if self.has_map() {
            Ok(())
        } else {
            Err(MapError::InvalidArgument(format!(
                "{} issued before the map was created",
                what
            )))
        }
    }
}

impl MapBackend for RenderContext {
    fn create_map(
        &mut self,
        map_id: &str,
        options: &Options,
        center: LatLng,
        zoom: u32,
    ) -> Result<()> {
        if self.has_map() {
            return Err(MapError::InvalidArgument(format!(
                "map '{}' created twice on one context",
                map_id
            )));
        }
        self.drawing_queue.push(DrawCommand::CreateMap {
            map_id: map_id.to_string(),
            options: options.clone(),
            center,
            zoom,
        });
        Ok(())
    }

    fn add_tile_layer(&mut self, url_template: &str) -> Result<()> {
        self.ensure_map("tile layer")?;
        self.drawing_queue.push(DrawCommand::TileLayer {
            url_template: url_template.to_string(),
        });
        Ok(())
    }

    fn add_overlay(&mut self, layer: &LayerInfo) -> Result<()> {
        self.ensure_map("overlay")?;
        self.drawing_queue.push(DrawCommand::Overlay(layer.clone()));
        Ok(())
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<()> {
        self.ensure_map("marker")?;
        self.drawing_queue.push(DrawCommand::Marker(marker.clone()));
        Ok(())
    }

    fn bind_event(&mut self, binding: &EventBinding) -> Result<()> {
        self.ensure_map("event")?;
        self.drawing_queue.push(DrawCommand::Event(binding.clone()));
        Ok(())
    }
}
