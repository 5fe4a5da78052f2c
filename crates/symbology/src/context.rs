use graphstore::NodeKey;

/// Pointer notification from the graph renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    EnterNode(NodeKey),
    LeaveNode,
}

/// UI interaction state passed explicitly into the styling reducers.
///
/// Owned by the rendering session and updated within the same synchronous
/// handler turns that read it; no module-level mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiContext {
    hovered: Option<NodeKey>,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::EnterNode(key) => self.hovered = Some(key),
            PointerEvent::LeaveNode => self.hovered = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerEvent, UiContext};

    #[test]
    fn enter_and_leave_track_the_hovered_node() {
        let mut ctx = UiContext::new();
        assert_eq!(ctx.hovered(), None);

        ctx.apply(PointerEvent::EnterNode("b".to_string()));
        assert_eq!(ctx.hovered(), Some("b"));

        ctx.apply(PointerEvent::LeaveNode);
        assert_eq!(ctx.hovered(), None);
    }
}
