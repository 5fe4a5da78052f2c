use foundation::{GeoPoint, Projection};
use graphstore::{GraphStore, NodeKey};

use crate::transform::CoordinateTransform;
use crate::view::GraphView;

/// Node fill color written at import.
pub const NODE_COLOR: &str = "#F98E24";

/// Presentation size from topology: `ln(degree)`, monotonically increasing.
///
/// Degree is clamped to 1 before the log so isolated nodes produce a finite
/// size instead of `ln(0)`. A degree-1 node therefore gets size 0, which is
/// accepted.
pub fn node_size(degree: usize) -> f64 {
    (degree.max(1) as f64).ln()
}

/// One-shot initial layout: for every node, derive its graph-space position
/// from its geographic coordinates and its presentation size from its
/// degree, and write the display attributes into the store.
///
/// Runs once at dataset-import time, synchronously, before the renderer is
/// attached. Positions are never recomputed afterwards; later viewport
/// resizes affect only the camera, not node placement.
pub fn build_initial_layout<P: Projection>(
    store: &mut GraphStore,
    transform: &CoordinateTransform<P>,
    renderer: &impl GraphView,
) {
    let viewport = renderer.dimensions();
    let keys: Vec<NodeKey> = store.node_keys().map(str::to_string).collect();

    for key in keys {
        let Some(record) = store.node(&key) else {
            continue;
        };
        let geo = GeoPoint::new(record.geo.latitude, record.geo.longitude);
        let label = record.geo.full_name.clone();
        let size = node_size(store.degree(&key));

        let pos = transform.geo_to_graph(geo, viewport);
        store.update_display(&key, |display| {
            display.x = pos.x;
            display.y = pos.y;
            display.size = size;
            display.label = label;
            display.color = NODE_COLOR.to_string();
        });
    }

    tracing::debug!(
        nodes = store.node_count(),
        width = viewport.width,
        height = viewport.height,
        "initial layout built"
    );
}

#[cfg(test)]
mod tests {
    use super::{NODE_COLOR, build_initial_layout, node_size};
    use crate::transform::CoordinateTransform;
    use crate::view::GraphView;
    use foundation::{GeoPoint, GraphPoint, ViewportPoint, ViewportSize, WebMercator};
    use graphstore::{GeoAttributes, GraphStore};

    struct FixedSurface(ViewportSize);

    impl GraphView for FixedSurface {
        fn dimensions(&self) -> ViewportSize {
            self.0
        }

        fn viewport_to_graph(&self, p: ViewportPoint) -> GraphPoint {
            GraphPoint::new(p.x, p.y)
        }
    }

    #[test]
    fn size_is_monotonic_in_degree() {
        let degrees = [1, 2, 3, 5, 10, 100];
        for pair in degrees.windows(2) {
            assert!(node_size(pair[0]) <= node_size(pair[1]));
        }
    }

    #[test]
    fn degree_one_yields_size_zero() {
        assert_eq!(node_size(1), 0.0);
    }

    #[test]
    fn degree_zero_is_clamped_before_the_log() {
        let size = node_size(0);
        assert!(size.is_finite());
        assert_eq!(size, 0.0);
    }

    #[test]
    fn layout_writes_position_size_label_and_color() {
        let mut store = GraphStore::new();
        store.add_node("cdg", GeoAttributes::new(49.0097, 2.5479, "Paris CDG"));
        store.add_node("lhr", GeoAttributes::new(51.47, -0.4543, "Heathrow"));
        store.add_node("jfk", GeoAttributes::new(40.6413, -73.7781, "JFK"));
        store.add_edge("cdg", "lhr", 1.0);
        store.add_edge("cdg", "jfk", 1.0);

        let transform = CoordinateTransform::new(WebMercator::new());
        let surface = FixedSurface(ViewportSize::new(800.0, 600.0));
        build_initial_layout(&mut store, &transform, &surface);

        let cdg = store.node("cdg").unwrap();
        let expected = transform.geo_to_graph(
            GeoPoint::new(49.0097, 2.5479),
            ViewportSize::new(800.0, 600.0),
        );
        assert_eq!(cdg.display.x, expected.x);
        assert_eq!(cdg.display.y, expected.y);
        assert_eq!(cdg.display.size, node_size(2));
        assert_eq!(cdg.display.label, "Paris CDG");
        assert_eq!(cdg.display.color, NODE_COLOR);

        // Degree-1 neighbors keep the accepted zero size.
        assert_eq!(store.node("lhr").unwrap().display.size, 0.0);
    }
}
