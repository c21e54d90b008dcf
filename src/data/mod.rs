pub mod geojson;

pub use geojson::GeoJsonLayer;
