pub mod builder;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;

pub use builder::MapBuilder;
pub use config::MapOptions;
pub use geo::{LatLng, LatLngBounds};
pub use map::Map;
