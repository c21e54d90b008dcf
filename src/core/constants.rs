//! Core constants derived from Leaflet defaults and the page-side renderer.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default map center latitude (Bordeaux).
pub const DEFAULT_LAT: f64 = 44.8485138261124;

/// Default map center longitude (Bordeaux).
pub const DEFAULT_LON: f64 = -0.563934445381165;

/// Default zoom level.
pub const DEFAULT_ZOOM: u32 = 10;

/// Markers a single map may hold before the large-set override is required.
pub const MAX_MARKERS_ON_MAP: usize = 5000;

/// Option key mirroring the scale control flag.
pub const SCALE_OPTION: &str = "scale";

/// Leaflet's default path color, also used as default fill color.
pub const DEFAULT_PATH_COLOR: &str = "#3388ff";

/// Leaflet's default stroke width in pixels.
pub const DEFAULT_PATH_WEIGHT: f64 = 3.0;

/// Leaflet's default stroke opacity.
pub const DEFAULT_PATH_OPACITY: f64 = 1.0;

/// Leaflet's default fill opacity.
pub const DEFAULT_FILL_OPACITY: f64 = 0.2;

/// Default marker icon image served alongside the page assets.
pub const MARKER_ICON_URL: &str = "/build/images/marker-icon.png";

/// Default marker shadow image.
pub const MARKER_SHADOW_URL: &str = "/build/images/marker-shadow.png";

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (i32, i32) = (25, 41);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (i32, i32) = (12, 41);

/// Popup opening point relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: (i32, i32) = (1, -34);

/// Tooltip opening point relative to the icon anchor.
pub const MARKER_TOOLTIP_ANCHOR: (i32, i32) = (16, -28);

/// Shadow image size.
pub const MARKER_SHADOW_SIZE: (i32, i32) = (41, 41);
