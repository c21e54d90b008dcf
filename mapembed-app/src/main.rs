use anyhow::Context;
use mapembed::{
    layers::tile::OPENSTREETMAP_URL, Circle, EmbedPayload, EventBinding, Icon, LatLng,
    LayerInfo, LegendItem, LegendPosition, Map, MapBackend, MapBuilder, MapOptions, Marker,
    MarkerSpec, Options, Popup, RendererAdapter,
};

/// Backend that logs every call instead of drawing
struct LoggingBackend;

impl MapBackend for LoggingBackend {
    fn create_map(
        &mut self,
        map_id: &str,
        options: &Options,
        center: LatLng,
        zoom: u32,
    ) -> mapembed::Result<()> {
        log::info!(
            "create map '{}' at ({}, {}) zoom {} with {} options",
            map_id,
            center.lat,
            center.lng,
            zoom,
            options.len()
        );
        Ok(())
    }

    fn add_tile_layer(&mut self, url_template: &str) -> mapembed::Result<()> {
        log::info!("background tiles from {}", url_template);
        Ok(())
    }

    fn add_overlay(&mut self, layer: &LayerInfo) -> mapembed::Result<()> {
        log::info!("overlay: {}", layer.kind());
        Ok(())
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> mapembed::Result<()> {
        log::info!(
            "marker at ({}, {}) icon {}{}",
            marker.position.lat,
            marker.position.lng,
            marker.icon.icon_url,
            marker
                .popup
                .as_ref()
                .map(|popup| format!(" popup '{}'", popup.content))
                .unwrap_or_default()
        );
        Ok(())
    }

    fn bind_event(&mut self, binding: &EventBinding) -> mapembed::Result<()> {
        log::info!("event '{}' -> {}", binding.name, binding.action);
        Ok(())
    }
}

fn sample_map() -> anyhow::Result<Map> {
    let mut map = MapBuilder::new()
        .center(44.8378, -0.5792)
        .zoom(13.0)
        .background(OPENSTREETMAP_URL)
        .title("Bordeaux")
        .map_options(MapOptions::interactive().with_zoom_limits(Some(10.0), Some(18.0)))
        .legend(LegendPosition::BottomRight)
        .build()
        .context("building the sample map")?;

    map.add_layer(
        Circle::new([44.8412, -0.5700], 400.0)
            .with_color("#d7263d")
            .with_fill_opacity(0.1),
    )?;
    map.add_marker(
        Marker::new(44.8412, -0.5700).with_popup(Popup::new("Place de la Bourse").with_max_width(200)),
    )?;
    map.add_marker(
        Marker::new(44.8258, -0.5562)
            .with_icon(Icon::new("/img/station.png").with_size([32, 32]).with_anchor([16, 32]))
            .with_option("title", "Gare Saint-Jean"),
    )?;

    let mut item = LegendItem::new();
    item.insert("label".to_string(), "Historic center".into());
    item.insert("color".to_string(), "#d7263d".into());
    map.add_legend_item(item)?;

    map.add_event("click", "showCoordinates", None);
    Ok(map)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let map = sample_map()?;
    let payload = map.embed("bordeaux-map")?;

    for (name, value) in payload.attributes() {
        println!("{}={}", name, value);
    }

    let attributes = payload.attributes();
    let reparsed = EmbedPayload::from_attributes(
        attributes.iter().map(|(name, value)| (*name, value.as_str())),
    )?;

    RendererAdapter::new(LoggingBackend)
        .render(&reparsed)
        .context("replaying the embedded map")?;

    if let Some(bounds) = map.markers_bounds() {
        log::info!("markers fit in {}", serde_json::to_string(&bounds.to_corners())?);
    }

    Ok(())
}
