use foundation::{GeoBounds, GraphPoint, ViewportPoint, ViewportSize};
use overlay::{AnimationHandle, FitMode, GraphView, MapView};
use tracing::info;

/// Stand-in graph renderer: a fixed surface plus a linear pan/zoom camera.
/// Surface y grows downward, graph y upward, matching the inverse a real
/// renderer exposes. No drawing happens here.
pub struct SimRenderer {
    size: ViewportSize,
    center: GraphPoint,
    ratio: f64,
}

impl SimRenderer {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size,
            center: GraphPoint::new(size.width / 2.0, size.height / 2.0),
            ratio: 1.0,
        }
    }

    /// Camera zoom; ratio below 1 shows a smaller graph area.
    pub fn zoom_by(&mut self, factor: f64) {
        self.ratio *= factor;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.center = GraphPoint::new(self.center.x + dx, self.center.y + dy);
    }
}

impl GraphView for SimRenderer {
    fn dimensions(&self) -> ViewportSize {
        self.size
    }

    fn viewport_to_graph(&self, p: ViewportPoint) -> GraphPoint {
        GraphPoint::new(
            self.center.x + (p.x - self.size.width / 2.0) * self.ratio,
            self.center.y + (self.size.height / 2.0 - p.y) * self.ratio,
        )
    }
}

/// Command-recording stand-in for the slippy map widget. Fit commands are
/// logged and kept; at most one animation is considered live at a time.
#[derive(Default)]
pub struct RecordingMap {
    next_handle: u64,
    live: Option<AnimationHandle>,
    pub commands: Vec<(GeoBounds, FitMode)>,
}

impl MapView for RecordingMap {
    fn fit_bounds(&mut self, bounds: GeoBounds, mode: FitMode) -> AnimationHandle {
        self.next_handle += 1;
        let handle = AnimationHandle(self.next_handle);
        info!(
            ?mode,
            north = bounds.top_left.lat_deg,
            west = bounds.top_left.lng_deg,
            south = bounds.bottom_right.lat_deg,
            east = bounds.bottom_right.lng_deg,
            "map fit command"
        );
        self.commands.push((bounds, mode));
        self.live = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) -> bool {
        if self.live == Some(handle) {
            self.live = None;
            return true;
        }
        false
    }
}
