mod sim;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use foundation::{ViewportSize, WebMercator};
use graphstore::store_from_json_str;
use overlay::{build_initial_layout, CoordinateTransform, ViewportSynchronizer};
use symbology::{edge_render, node_render, PointerEvent, UiContext};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::sim::{RecordingMap, SimRenderer};

/// Overlay a geo-positioned graph on a slippy map: load a dataset, build
/// the one-shot layout, then replay a scripted pan/zoom/hover session,
/// logging every map command the synchronizer issues.
#[derive(Parser)]
struct Args {
    /// Graph dataset: JSON nodes/edges with latitude/longitude/fullName
    /// node attributes.
    dataset: PathBuf,

    /// Rendering surface width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Rendering surface height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let payload = match fs::read_to_string(&args.dataset) {
        Ok(payload) => payload,
        Err(e) => {
            error!(path = %args.dataset.display(), "failed to read dataset: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut store = match store_from_json_str(&payload) {
        Ok(store) => store,
        Err(e) => {
            error!(path = %args.dataset.display(), "failed to load dataset: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        nodes = store.node_count(),
        edges = store.edge_count(),
        "dataset loaded"
    );

    let mut renderer = SimRenderer::new(ViewportSize::new(args.width, args.height));
    let mut map = RecordingMap::default();

    let transform = CoordinateTransform::new(WebMercator::new());
    build_initial_layout(&mut store, &transform, &renderer);

    let mut sync = ViewportSynchronizer::new(transform);
    sync.initial_sync(&renderer, &mut map);

    // Scripted interaction: zoom in, pan east, zoom back out. Each camera
    // change triggers one synchronization, in order.
    renderer.zoom_by(0.5);
    sync.on_camera_updated(&renderer, &mut map);
    renderer.pan_by(40.0, 0.0);
    sync.on_camera_updated(&renderer, &mut map);
    renderer.zoom_by(2.0);
    sync.on_camera_updated(&renderer, &mut map);

    // Hover pass over the best-connected node.
    let hovered = store
        .node_keys()
        .max_by_key(|key| store.degree(key))
        .map(str::to_string);
    if let Some(key) = hovered {
        let mut ctx = UiContext::new();
        ctx.apply(PointerEvent::EnterNode(key.clone()));
        let visible_nodes = store
            .nodes()
            .filter(|(k, record)| !node_render(k, &record.display, &ctx, &store).hidden)
            .count();
        let hidden_edges = store
            .edges()
            .iter()
            .filter(|edge| edge_render(edge, &ctx).hidden)
            .count();
        info!(hovered = %key, visible_nodes, hidden_edges, "hover highlight");
        ctx.apply(PointerEvent::LeaveNode);
    }

    info!(map_commands = map.commands.len(), "session complete");
    ExitCode::SUCCESS
}
