use graphstore::{EdgeRecord, GraphStore, NodeDisplay};

use crate::context::UiContext;

/// Per-draw node attributes produced by [`node_render`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRender {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
    pub color: String,
    pub highlighted: bool,
    pub hidden: bool,
}

/// Per-draw edge attributes produced by [`edge_render`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeRender {
    pub size: f64,
    pub hidden: bool,
}

/// Node styling reducer, re-evaluated on every draw.
///
/// With no hover, every node keeps its base attributes: visible, not
/// highlighted. While a node is hovered, the hovered node and its
/// neighbors are highlighted and everything else is hidden.
pub fn node_render(
    key: &str,
    base: &NodeDisplay,
    ctx: &UiContext,
    store: &GraphStore,
) -> NodeRender {
    let mut render = NodeRender {
        x: base.x,
        y: base.y,
        size: base.size,
        label: base.label.clone(),
        color: base.color.clone(),
        highlighted: false,
        hidden: false,
    };

    if let Some(hovered) = ctx.hovered() {
        if key == hovered || store.is_neighbor(hovered, key) {
            render.highlighted = true;
        } else {
            render.hidden = true;
        }
    }

    render
}

/// Edge styling reducer, re-evaluated on every draw.
///
/// The rendered size is the edge weight. While a node is hovered, edges
/// that do not touch it are hidden.
pub fn edge_render(edge: &EdgeRecord, ctx: &UiContext) -> EdgeRender {
    let hidden = ctx
        .hovered()
        .is_some_and(|hovered| !edge.touches(hovered));
    EdgeRender {
        size: edge.weight,
        hidden,
    }
}
