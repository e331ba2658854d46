//! Geometry mapper
//!
//! Linear mappings from geographic and elevation values to canvas space,
//! plus the fixed canvas layout. Nothing here clamps: values outside the
//! declared ranges extrapolate.

/// Left edge of the map rectangle
pub const MAP_LEFT: f64 = 50.0;
/// Top edge of the map rectangle
pub const MAP_TOP: f64 = 200.0;
/// Widest the map may be drawn
pub const MAX_MAP_WIDTH: f64 = 1100.0;
/// Vertical space kept free below the map
pub const MAP_BOTTOM_MARGIN: f64 = 100.0;
/// Extra scrollable rows below the viewport
pub const CANVAS_EXTRA_HEIGHT: f64 = 200.0;

/// Elevation range covered by markers and the detail bar (meters)
pub const MIN_ELEVATION: f64 = -7000.0;
pub const MAX_ELEVATION: f64 = 7000.0;

// Alignment corrections against the background image
const PROJECT_X_OFFSET: f64 = -30.0;
const PROJECT_Y_OFFSET: f64 = -20.0;

/// A point in canvas coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Screen rectangle the world map is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Unclamped linear remap of `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Project longitude/latitude (degrees) into the map rectangle
pub fn project_geo(lon: f64, lat: f64, rect: &MapRect) -> Point {
    let x = map_range(
        lon,
        -180.0,
        180.0,
        rect.left + PROJECT_X_OFFSET,
        rect.left + rect.width + PROJECT_X_OFFSET,
    );
    let y = map_range(
        lat,
        90.0,
        -90.0,
        rect.top + PROJECT_Y_OFFSET,
        rect.top + rect.height,
    );
    Point::new(x, y)
}

/// Marker half-height in pixels
pub fn elevation_to_size(elevation: f64) -> f64 {
    map_range(elevation, MIN_ELEVATION, MAX_ELEVATION, 6.0, 10.0)
}

/// Blue (deep) to red (high) gradient, green fixed at zero
pub fn elevation_to_color(elevation: f64) -> (f64, f64, f64) {
    let r = map_range(elevation, MIN_ELEVATION, MAX_ELEVATION, 50.0, 240.0);
    let b = map_range(elevation, MIN_ELEVATION, MAX_ELEVATION, 240.0, 50.0);
    (r, 0.0, b)
}

/// Fit the image aspect ratio inside `MAX_MAP_WIDTH x (viewport_height - MAP_BOTTOM_MARGIN)`
pub fn compute_map_size(image_width: u32, image_height: u32, viewport_height: f64) -> (f64, f64) {
    let aspect = image_width as f64 / image_height as f64;
    let available_w = MAX_MAP_WIDTH;
    let available_h = viewport_height - MAP_BOTTOM_MARGIN;

    if available_w / available_h > aspect {
        (available_h * aspect, available_h)
    } else {
        (available_w, available_w / aspect)
    }
}

/// Canvas size and map placement, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub map: MapRect,
}

impl Layout {
    pub fn new(
        viewport_width: f64,
        viewport_height: f64,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        let (width, height) = compute_map_size(image_width, image_height, viewport_height);
        Self {
            canvas_width: viewport_width,
            canvas_height: viewport_height + CANVAS_EXTRA_HEIGHT,
            map: MapRect {
                left: MAP_LEFT,
                top: MAP_TOP,
                width,
                height,
            },
        }
    }
}
