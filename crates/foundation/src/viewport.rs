/// Pixel coordinate on the rendering surface. Origin at the top-left
/// corner, y grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewportPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position in the graph renderer's local coordinate space (pixel-like
/// units at the reference zoom). Y grows upward relative to map pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current pixel dimensions of the rendering surface.
///
/// This is live state: it changes on window resize without an event, so
/// callers re-read it from the renderer before every transform instead of
/// caching it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
