use foundation::{GeoBounds, GraphPoint, ViewportPoint, ViewportSize};

/// Handle to a map view animation issued by [`MapView::fit_bounds`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AnimationHandle(pub u64);

/// How the map should move to a requested bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FitMode {
    /// Instantaneous reposition, no animation.
    Snap,
    /// Animated fly-to over the given duration.
    Fly { duration_s: f64 },
}

/// Graph renderer seam: the two read-only queries the core needs.
///
/// `dimensions` must report the live surface size (it changes on window
/// resize without an event, so it is re-read before every transform).
/// `viewport_to_graph` is the renderer's own camera-dependent inverse from
/// surface pixels into graph space.
pub trait GraphView {
    fn dimensions(&self) -> ViewportSize;
    fn viewport_to_graph(&self, p: ViewportPoint) -> GraphPoint;
}

/// Map widget seam: frame a geographic bounding box, snapping or flying.
///
/// `fit_bounds` is fire-and-forget from the widget's perspective; the
/// returned handle lets the synchronizer cancel an animation it is about
/// to supersede. `cancel` returns `false` when the animation already
/// finished or was never known.
pub trait MapView {
    fn fit_bounds(&mut self, bounds: GeoBounds, mode: FitMode) -> AnimationHandle;
    fn cancel(&mut self, handle: AnimationHandle) -> bool;
}
