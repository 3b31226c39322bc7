use crate::config::OverlayConfig;
use crate::nodes::tree::{NodeId, Orientation, ViewNode, ViewTree};
use crate::overlay::SnapshotOverlay;
use crate::result::SnapResult;
use crate::types::Rect;
use tracing::info;

/// Node type for hosting a snapshot overlay inside an application's views.
pub enum HostNode {
    /// A plain view with a frame, e.g. a window or a content view.
    View { name: String, frame: Rect },
    Mask(Box<SnapshotOverlay>),
}

impl HostNode {
    pub fn view(name: impl Into<String>, frame: Rect) -> Self {
        HostNode::View {
            name: name.into(),
            frame,
        }
    }

    pub fn frame(&self) -> Rect {
        match self {
            HostNode::View { frame, .. } => *frame,
            HostNode::Mask(overlay) => overlay.bounds(),
        }
    }

    pub fn is_mask(&self) -> bool {
        matches!(self, HostNode::Mask(_))
    }

    pub fn overlay(&self) -> Option<&SnapshotOverlay> {
        match self {
            HostNode::Mask(overlay) => Some(&**overlay),
            HostNode::View { .. } => None,
        }
    }

    pub fn overlay_mut(&mut self) -> Option<&mut SnapshotOverlay> {
        match self {
            HostNode::Mask(overlay) => Some(&mut **overlay),
            HostNode::View { .. } => None,
        }
    }
}

impl From<SnapshotOverlay> for HostNode {
    fn from(overlay: SnapshotOverlay) -> Self {
        HostNode::Mask(Box::new(overlay))
    }
}

impl ViewNode for HostNode {
    fn label(&self) -> String {
        match self {
            HostNode::View { name, frame } => format!(
                "{} {}x{}",
                name, frame.size.width, frame.size.height
            ),
            HostNode::Mask(overlay) => {
                let selection = overlay.selection();
                format!(
                    "SnapshotMask selection=({}, {}, {}x{})",
                    selection.origin.x,
                    selection.origin.y,
                    selection.size.width,
                    selection.size.height
                )
            }
        }
    }

    fn orientation_changed(&mut self, orientation: Orientation) {
        if let HostNode::Mask(overlay) = self {
            overlay.orientation_changed(orientation);
        }
    }
}

/// The first child of `host` that `is_mask` accepts.
pub fn find_mask<N: ViewNode>(
    tree: &ViewTree<N>,
    host: NodeId<N>,
    is_mask: impl Fn(&N) -> bool,
) -> Option<NodeId<N>> {
    tree.children(host)
        .iter()
        .copied()
        .find(|child| tree.get(*child).is_some_and(&is_mask))
}

/// Shows a snapshot overlay covering `bounds` on top of `host`.
///
/// An overlay already attached to `host` is brought to the front with its
/// controls visible and keeps its selection.
pub fn show_snapshot_mask(
    tree: &mut ViewTree<HostNode>,
    host: NodeId<HostNode>,
    bounds: Rect,
    config: &OverlayConfig,
) -> SnapResult<NodeId<HostNode>> {
    if let Some(existing) = find_mask(tree, host, HostNode::is_mask) {
        info!("Reusing snapshot mask {:?}", existing);
        tree.bring_to_front(existing)?;
        if let Some(overlay) = tree.get_mut(existing).and_then(HostNode::overlay_mut) {
            overlay.set_controls_visible(true);
        }
        return Ok(existing);
    }
    info!("Adding snapshot mask to {:?}", host);
    let overlay = SnapshotOverlay::new(bounds, config.clone());
    tree.add_child(host, overlay.into())
}

/// Removes the snapshot overlay from `host`. Returns whether there was one.
pub fn hide_snapshot_mask(
    tree: &mut ViewTree<HostNode>,
    host: NodeId<HostNode>,
) -> SnapResult<bool> {
    let Some(mask) = find_mask(tree, host, HostNode::is_mask) else {
        return Ok(false);
    };
    info!("Removing snapshot mask {:?}", mask);
    tree.remove(mask)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::events::PointerEvent;
    use crate::overlay::OverlayResponse;
    use crate::test::rect;
    use crate::types::Point;
    use expect_test::expect;

    fn host_tree() -> (ViewTree<HostNode>, NodeId<HostNode>, NodeId<HostNode>) {
        let mut tree = ViewTree::new();
        let window = tree
            .insert_root(HostNode::view("Window", rect(0.0, 0.0, 400.0, 300.0)))
            .unwrap();
        let content = tree
            .add_child(window, HostNode::view("Content", rect(0.0, 0.0, 400.0, 300.0)))
            .unwrap();
        (tree, window, content)
    }

    #[test]
    fn show_adds_a_mask_on_top() {
        let (mut tree, window, content) = host_tree();
        let bounds = tree.get(window).unwrap().frame();
        let mask = show_snapshot_mask(&mut tree, window, bounds, &OverlayConfig::default()).unwrap();
        assert_eq!(tree.children(window), &[content, mask]);
        expect![[r#"
            Window 400x300
            ├── Content 400x300
            └── SnapshotMask selection=(120, 70, 160x160)
        "#]]
        .assert_eq(&tree.dump(window));
    }

    #[test]
    fn show_reuses_the_existing_mask() {
        let (mut tree, window, content) = host_tree();
        let bounds = rect(0.0, 0.0, 400.0, 300.0);
        let config = OverlayConfig::default();
        let mask = show_snapshot_mask(&mut tree, window, bounds, &config).unwrap();
        tree.bring_to_front(content).unwrap();
        {
            let overlay = tree.get_mut(mask).unwrap().overlay_mut().unwrap();
            overlay.full_screen();
            overlay.set_controls_visible(false);
        }

        let again = show_snapshot_mask(&mut tree, window, bounds, &config).unwrap();
        assert_eq!(again, mask);
        assert_eq!(tree.children(window), &[content, mask]);
        let overlay = tree.get(mask).unwrap().overlay().unwrap();
        assert!(overlay.controls_visible());
        assert_eq!(overlay.selection(), bounds);
    }

    #[test]
    fn hide_removes_the_mask() {
        let (mut tree, window, content) = host_tree();
        assert!(!hide_snapshot_mask(&mut tree, window).unwrap());
        let mask = show_snapshot_mask(
            &mut tree,
            window,
            rect(0.0, 0.0, 400.0, 300.0),
            &OverlayConfig::default(),
        )
        .unwrap();
        assert!(hide_snapshot_mask(&mut tree, window).unwrap());
        assert!(tree.get(mask).is_none());
        assert_eq!(tree.children(window), &[content]);
    }

    #[test]
    fn find_mask_uses_the_given_predicate() {
        let (mut tree, window, content) = host_tree();
        assert_eq!(find_mask(&tree, window, HostNode::is_mask), None);
        let mask = show_snapshot_mask(
            &mut tree,
            window,
            rect(0.0, 0.0, 400.0, 300.0),
            &OverlayConfig::default(),
        )
        .unwrap();
        assert_eq!(find_mask(&tree, window, HostNode::is_mask), Some(mask));
        assert_eq!(
            find_mask(&tree, window, |node| node.label().starts_with("Content")),
            Some(content)
        );
        assert_eq!(find_mask(&tree, content, HostNode::is_mask), None);
    }

    #[test]
    fn events_reach_the_mask_through_the_tree() {
        let (mut tree, window, _) = host_tree();
        let mask = show_snapshot_mask(
            &mut tree,
            window,
            rect(0.0, 0.0, 400.0, 300.0),
            &OverlayConfig::default(),
        )
        .unwrap();
        let overlay = tree.get_mut(mask).unwrap().overlay_mut().unwrap();
        overlay
            .handle_event(PointerEvent::began(Point::new(200.0, 150.0)))
            .unwrap();
        let response = overlay
            .handle_event(PointerEvent::ended(Point::new(190.0, 150.0)))
            .unwrap();
        assert_eq!(
            response,
            OverlayResponse::SelectionChanged(rect(110.0, 70.0, 160.0, 160.0))
        );
        assert_eq!(
            tree.find_ancestor(mask, |node| !node.is_mask()),
            Some(window)
        );
    }

    #[test]
    fn rotation_is_forwarded_to_the_mask() {
        let (mut tree, window, _) = host_tree();
        let mask = show_snapshot_mask(
            &mut tree,
            window,
            rect(0.0, 0.0, 400.0, 200.0),
            &OverlayConfig::default(),
        )
        .unwrap();
        tree.broadcast_orientation(window, Orientation::Portrait);
        let overlay = tree.get(mask).unwrap().overlay().unwrap();
        assert_eq!(overlay.bounds(), rect(0.0, 0.0, 200.0, 400.0));
        assert_eq!(overlay.orientation(), Orientation::Portrait);
    }
}
