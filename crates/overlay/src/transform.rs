use foundation::{GeoPoint, GraphPoint, ProjectedPoint, Projection, ViewportSize};

/// Reference zoom at which all projections are evaluated. Using the same
/// constant on every call makes projected coordinates zoom-independent and
/// directly comparable across calls.
pub const REFERENCE_ZOOM: f64 = 0.0;

/// Bidirectional geo ⇄ graph coordinate transform.
///
/// Composes a map projection with the renderer's viewport height. Map
/// pixels and graph space agree on x but run y in opposite directions, so
/// both directions apply `graph_y = viewport_height - projected_y`; missing
/// the inversion on either side breaks the round-trip.
///
/// The viewport size is taken per call rather than stored: callers read it
/// fresh from the renderer so window resizes are picked up. Round-trips
/// are exact (to projection precision) only while the viewport is held
/// constant between the two calls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateTransform<P> {
    projection: P,
}

impl<P: Projection> CoordinateTransform<P> {
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    pub fn geo_to_graph(&self, geo: GeoPoint, viewport: ViewportSize) -> GraphPoint {
        let p = self.projection.project(geo, REFERENCE_ZOOM);
        GraphPoint::new(p.x, viewport.height - p.y)
    }

    pub fn graph_to_geo(&self, p: GraphPoint, viewport: ViewportSize) -> GeoPoint {
        self.projection.unproject(
            ProjectedPoint::new(p.x, viewport.height - p.y),
            REFERENCE_ZOOM,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CoordinateTransform;
    use foundation::{GeoPoint, GraphPoint, ProjectedPoint, Projection, ViewportSize, WebMercator};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    /// Identity "projection" that records nothing and transforms nothing,
    /// isolating the axis-inversion rule from the mercator math.
    struct PassThrough;

    impl Projection for PassThrough {
        fn project(&self, geo: GeoPoint, _zoom_ref: f64) -> ProjectedPoint {
            ProjectedPoint::new(geo.lng_deg, geo.lat_deg)
        }

        fn unproject(&self, p: ProjectedPoint, _zoom_ref: f64) -> GeoPoint {
            GeoPoint::new(p.y, p.x)
        }
    }

    #[test]
    fn y_axis_is_inverted_against_viewport_height() {
        let transform = CoordinateTransform::new(PassThrough);
        let viewport = ViewportSize::new(800.0, 600.0);

        // graph (100, 50) must reach the projection as pixel y = 600 - 50.
        let geo = transform.graph_to_geo(GraphPoint::new(100.0, 50.0), viewport);
        assert_close(geo.lat_deg, 550.0, 1e-12);
        assert_close(geo.lng_deg, 100.0, 1e-12);

        // And the forward direction applies the same rule.
        let p = transform.geo_to_graph(GeoPoint::new(550.0, 100.0), viewport);
        assert_close(p.x, 100.0, 1e-12);
        assert_close(p.y, 50.0, 1e-12);
    }

    #[test]
    fn round_trip_within_projection_tolerance() {
        let transform = CoordinateTransform::new(WebMercator::new());
        let viewport = ViewportSize::new(800.0, 600.0);

        for &(x, y) in &[(0.0, 0.0), (100.0, 50.0), (799.0, 599.0), (128.0, 128.0)] {
            let p = GraphPoint::new(x, y);
            let rt = transform.geo_to_graph(transform.graph_to_geo(p, viewport), viewport);
            assert_close(rt.x, p.x, 1e-6);
            assert_close(rt.y, p.y, 1e-6);
        }
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        // Only subtraction is involved, so a not-yet-sized surface is safe.
        let transform = CoordinateTransform::new(WebMercator::new());
        let viewport = ViewportSize::new(0.0, 0.0);
        let geo = transform.graph_to_geo(GraphPoint::new(0.0, 0.0), viewport);
        let back = transform.geo_to_graph(geo, viewport);
        assert_close(back.x, 0.0, 1e-9);
        assert_close(back.y, 0.0, 1e-9);
    }
}
