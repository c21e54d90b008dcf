pub mod legend;
pub mod popup;

pub use legend::{Legend, LegendItem, LegendPosition};
pub use popup::Popup;
