use mapembed::prelude::*;
use mapembed::constants::MAX_MARKERS_ON_MAP;
use serde_json::{json, Value};

/// Integration tests for building and serializing a map configuration
/// the way a page handler does it
#[cfg(test)]
mod map_configuration {
    use super::*;

    fn markers(count: usize) -> Vec<Marker> {
        (0..count)
            .map(|i| Marker::new(i as f64 * 0.001, 0.0))
            .collect()
    }

    #[test]
    fn test_ready_after_initialization() {
        for (lat, lon, zoom) in [(0.0, 0.0, 0.0), (44.84, -0.57, 10.0), (-89.9, 179.9, 18.0)] {
            let map = Map::new(lat, lon, zoom).unwrap();
            assert!(map.is_ready());
            assert_eq!(map.options()["scale"], true);
        }
        assert!(Map::default().is_ready());
    }

    #[test]
    fn test_invalid_initialization_rejected() {
        assert!(matches!(
            Map::new(f64::NAN, 0.0, 1.0),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            Map::new(0.0, f64::INFINITY, 1.0),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            Map::new(0.0, 0.0, 1.5),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            Map::new(0.0, 0.0, -1.0),
            Err(MapError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_marker_ceiling_on_add() {
        let mut map = Map::default();
        for marker in markers(MAX_MARKERS_ON_MAP) {
            map.add_marker(marker).unwrap();
        }
        let before = map.clone();

        let err = map.add_marker(Marker::new(1.0, 1.0)).unwrap_err();

        assert!(matches!(
            err,
            MapError::CapacityExceeded { count: 5001, limit: 5000 }
        ));
        assert!(err.to_string().contains("allow_large_set_of_markers"));
        assert_eq!(map, before);
    }

    #[test]
    fn test_large_marker_sets_when_allowed() {
        let mut map = Map::default();
        map.allow_large_set_of_markers();
        map.set_markers(markers(MAX_MARKERS_ON_MAP + 10)).unwrap();
        map.add_marker(Marker::new(1.0, 1.0)).unwrap();

        assert_eq!(map.markers().len(), MAX_MARKERS_ON_MAP + 11);
    }

    #[test]
    fn test_set_markers_over_ceiling_keeps_prior_markers() {
        let mut map = Map::default();
        map.set_markers(markers(3)).unwrap();
        let prior = map.markers().to_vec();

        let result = map.set_markers(markers(MAX_MARKERS_ON_MAP + 1));

        assert!(matches!(result, Err(MapError::CapacityExceeded { .. })));
        assert_eq!(map.markers(), prior.as_slice());
    }

    #[test]
    fn test_extend_markers_is_all_or_nothing() {
        let mut map = Map::default();
        map.set_markers(markers(MAX_MARKERS_ON_MAP - 1)).unwrap();

        let result = map.extend_markers(markers(2));

        assert!(matches!(
            result,
            Err(MapError::CapacityExceeded { count: 5001, limit: 5000 })
        ));
        assert_eq!(map.markers().len(), MAX_MARKERS_ON_MAP - 1);

        map.extend_markers(markers(1)).unwrap();
        assert_eq!(map.markers().len(), MAX_MARKERS_ON_MAP);
    }

    #[test]
    fn test_non_finite_marker_positions_rejected() {
        let mut map = Map::default();
        map.add_marker(Marker::new(1.0, 2.0)).unwrap();
        let before = map.clone();

        assert!(matches!(
            map.add_marker(Marker::new(f64::NAN, 2.0)),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            map.extend_markers(vec![Marker::new(3.0, 4.0), Marker::new(3.0, f64::INFINITY)]),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            map.set_markers(vec![Marker::new(f64::NEG_INFINITY, 0.0)]),
            Err(MapError::InvalidArgument(_))
        ));
        assert_eq!(map, before);

        let payload = map.embed("map").unwrap();
        let mut context = RenderContext::new();
        RendererAdapter::new(&mut context).render(&payload).unwrap();
        assert_eq!(context.markers().count(), 1);
    }

    #[test]
    fn test_non_finite_layer_geometry_rejected() {
        let mut map = Map::default();

        assert!(matches!(
            map.add_layer(Circle::new([1.0, 1.0], f64::INFINITY)),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            map.add_layer(AdjustableGrid::new("#000000", f64::NAN)),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            map.add_layer(Rectangle::new([0.0, f64::NAN], [1.0, 1.0])),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(map.overlays().is_empty());
        assert_eq!(map.layers_info_json().unwrap(), "[]");
    }

    #[test]
    fn test_markers_json() {
        let mut map = Map::default();
        assert_eq!(map.markers_json().unwrap(), "[]");

        map.add_marker(Marker::new(1.0, 2.0)).unwrap();
        let json = map.markers_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed,
            json!([{
                "lat": 1.0,
                "lon": 2.0,
                "icon": null,
                "options": null,
                "popup": null,
                "events": null
            }])
        );

        let markers: Vec<Marker> = serde_json::from_str(&json).unwrap();
        assert_eq!(markers, map.markers());
    }

    #[test]
    fn test_events_json() {
        let mut map = Map::default();
        assert_eq!(map.events_json().unwrap(), None);
        assert_eq!(map.embed("map").unwrap().events, None);

        map.add_event("click", "openPanel", Some(json!({"panel": "info"})));
        map.add_event("zoomend", "refresh", None);
        map.add_event("moveend", "saveView", Some(json!([1, 2])));

        let json = map.events_json().unwrap().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed,
            json!([
                {"name": "click", "action": "openPanel", "params": {"panel": "info"}},
                {"name": "zoomend", "action": "refresh", "params": null},
                {"name": "moveend", "action": "saveView", "params": [1, 2]}
            ])
        );
    }

    #[test]
    fn test_rebinding_event_keeps_position() {
        let mut map = Map::default();
        map.add_event("click", "first", None);
        map.add_event("zoomend", "refresh", None);
        map.add_event("click", "second", None);

        let names: Vec<_> = map.events().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["click", "zoomend"]);
        assert_eq!(map.events().get("click").map(|b| b.action.as_str()), Some("second"));
    }

    #[test]
    fn test_empty_legend_items_rejected() {
        let mut map = Map::default();
        map.add_legend(LegendPosition::BottomRight);

        assert!(matches!(
            map.add_legend_item(LegendItem::new()),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(matches!(
            map.add_legend_items(Vec::new()),
            Err(MapError::InvalidArgument(_))
        ));
        assert_eq!(map.legend_items(), None);

        let mut item = LegendItem::new();
        item.insert("label".to_string(), json!("Stations"));
        item.insert("color".to_string(), json!("#ff0000"));
        map.add_legend_item(item.clone()).unwrap();
        assert_eq!(map.legend_items(), Some(&[item][..]));
    }

    #[test]
    fn test_set_background_replaces_in_place() {
        let mut map = Map::default();
        map.add_layer(Circle::new([1.0, 1.0], 10.0)).unwrap();
        map.add_layer(Grid::new()).unwrap();

        map.set_background("url-A");
        map.set_background("url-B");

        assert_eq!(map.background().url(), "url-B");
        assert_eq!(map.layer_count(), 3);
        assert_eq!(map.overlays().len(), 2);
        assert_eq!(map.overlays()[0].kind(), "circle");
        assert_eq!(map.overlays()[1].kind(), "grid");

        map.remove_background();
        assert_eq!(map.background().url(), "");
        assert_eq!(map.layer_count(), 3);
    }

    #[test]
    fn test_circle_layer_info() {
        let mut map = Map::default();
        map.add_layer(Circle::new([1.0, 1.0], 10.0)).unwrap();

        let info: Value = serde_json::from_str(&map.layers_info_json().unwrap()).unwrap();
        let layers = info.as_array().unwrap();

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0]["isCircle"], true);
        assert_eq!(layers[0]["center"], json!([1.0, 1.0]));
        assert_eq!(layers[0]["options"]["radius"], 10.0);
    }

    #[test]
    fn test_overlay_shapes() {
        let mut map = Map::default();
        map.add_layer(TileLayer::new("https://overlay/{z}/{x}/{y}.png").with_option("opacity", 0.5))
            .unwrap();
        map.add_layer(Rectangle::new([0.0, 0.0], [1.0, 1.0]).with_color("#ff0000")).unwrap();
        map.add_layer(AdjustableGrid::default()).unwrap();
        map.add_layer(
            "{\"type\":\"Point\",\"coordinates\":[2.35,48.85]}"
                .parse::<GeoJsonLayer>()
                .unwrap(),
        )
        .unwrap();

        let info: Value = serde_json::to_value(map.layers_info()).unwrap();

        assert_eq!(
            info[0],
            json!({
                "background": "https://overlay/{z}/{x}/{y}.png",
                "options": {"opacity": 0.5},
                "isGeoJson": false,
                "events": null
            })
        );
        assert_eq!(info[1]["isRectangle"], true);
        assert_eq!(info[1]["points"], json!([[0.0, 0.0], [1.0, 1.0]]));
        assert_eq!(info[1]["options"]["color"], "#ff0000");
        assert_eq!(info[2], json!({"isAdjustableGrid": true, "color": "#3388ff", "width": 1.0}));
        assert_eq!(info[3]["isGeoJson"], true);
        assert_eq!(info[3]["json"]["type"], "Point");
    }

    #[test]
    fn test_embed_payload() {
        let map = MapBuilder::new()
            .center(44.84, -0.57)
            .zoom(13.0)
            .background(mapembed::layers::tile::OPENSTREETMAP_URL)
            .without_scale()
            .build()
            .unwrap();

        let payload = map.embed("city-map").unwrap();
        assert_eq!(payload.map_id, "city-map");
        assert_eq!(payload.zoom, 13);
        assert_eq!(payload.markers, "[]");
        assert_eq!(payload.layers, "[]");
        assert_eq!(payload.options, r#"{"scale":false}"#);

        assert!(matches!(map.embed(""), Err(MapError::InvalidArgument(_))));
    }
}
