use foundation::{GeoBounds, Projection, ViewportPoint};

use crate::transform::CoordinateTransform;
use crate::view::{AnimationHandle, FitMode, GraphView, MapView};

/// Fly-to duration for camera-triggered synchronizations, in seconds.
pub const FLY_DURATION_S: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq)]
enum SyncState {
    Idle,
    /// A fit command was issued and its animation may still be in flight.
    Syncing(AnimationHandle),
}

/// One-directional feedback loop from the graph camera to the map view.
///
/// On every trigger the synchronizer re-derives the visible geographic
/// bounding box from scratch: it reads the renderer's live viewport size,
/// pushes the two surface corners through the renderer's
/// viewport-to-graph inverse, converts them to geographic coordinates, and
/// commands the map to frame the result. There is no cached bounding box
/// to drift out of date, so keyboard zoom, scroll, and programmatic
/// recentre all funnel through the same path.
///
/// Ordering contract: one fit command per trigger, issued in trigger
/// order. A trigger that arrives while a previous animation may still be
/// in flight cancels that animation before issuing the next command, so
/// the map never plays superseded animations to completion.
///
/// The synchronizer never reads the map's pan/zoom state; the graph camera
/// is the single source of truth and the map is a driven backdrop.
#[derive(Debug)]
pub struct ViewportSynchronizer<P> {
    transform: CoordinateTransform<P>,
    state: SyncState,
    synced_once: bool,
}

impl<P: Projection> ViewportSynchronizer<P> {
    pub fn new(transform: CoordinateTransform<P>) -> Self {
        Self {
            transform,
            state: SyncState::Idle,
            synced_once: false,
        }
    }

    pub fn transform(&self) -> &CoordinateTransform<P> {
        &self.transform
    }

    /// Startup synchronization, before any user interaction. The first
    /// sync snaps instead of flying so the map does not animate from its
    /// default view to the dataset's extent.
    pub fn initial_sync(
        &mut self,
        renderer: &impl GraphView,
        map: &mut impl MapView,
    ) -> GeoBounds {
        self.sync(renderer, map)
    }

    /// Handler for the graph camera's "updated" notification.
    pub fn on_camera_updated(
        &mut self,
        renderer: &impl GraphView,
        map: &mut impl MapView,
    ) -> GeoBounds {
        self.sync(renderer, map)
    }

    fn sync(&mut self, renderer: &impl GraphView, map: &mut impl MapView) -> GeoBounds {
        if let SyncState::Syncing(handle) = self.state {
            let cancelled = map.cancel(handle);
            tracing::trace!(?handle, cancelled, "superseding in-flight map animation");
        }

        let dims = renderer.dimensions();
        let top_left = renderer.viewport_to_graph(ViewportPoint::new(0.0, 0.0));
        let bottom_right = renderer.viewport_to_graph(ViewportPoint::new(dims.width, dims.height));

        let bounds = GeoBounds::new(
            self.transform.graph_to_geo(top_left, dims),
            self.transform.graph_to_geo(bottom_right, dims),
        );

        let mode = if self.synced_once {
            FitMode::Fly {
                duration_s: FLY_DURATION_S,
            }
        } else {
            FitMode::Snap
        };
        let handle = map.fit_bounds(bounds, mode);
        tracing::debug!(
            ?mode,
            ?handle,
            top_left_lat = bounds.top_left.lat_deg,
            top_left_lng = bounds.top_left.lng_deg,
            bottom_right_lat = bounds.bottom_right.lat_deg,
            bottom_right_lng = bounds.bottom_right.lng_deg,
            "framed map to graph viewport"
        );

        self.state = SyncState::Syncing(handle);
        self.synced_once = true;
        bounds
    }
}
