use crate::arenal::{Arenal, Idx};
use crate::bail;
use crate::result::SnapResult;
use crate::types::Size;
use termtree::Tree;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::LandscapeLeft | Orientation::LandscapeRight)
    }

    /// Best guess for a screen of the given size.
    pub fn for_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::LandscapeLeft
        } else {
            Orientation::Portrait
        }
    }
}

/// Something that lives in a [`ViewTree`].
pub trait ViewNode {
    /// Short description used in tree dumps.
    fn label(&self) -> String;

    fn orientation_changed(&mut self, _orientation: Orientation) {}
}

pub struct TreeEntry<N> {
    node: N,
    parent: Option<NodeId<N>>,
    children: Vec<NodeId<N>>,
}

pub type NodeId<N> = Idx<TreeEntry<N>>;

/// Nodes with a parent and ordered children. Later children are in front of
/// earlier ones.
pub struct ViewTree<N> {
    arena: Arenal<TreeEntry<N>>,
    root: Option<NodeId<N>>,
}

impl<N> Default for ViewTree<N> {
    fn default() -> Self {
        Self {
            arena: Arenal::new(),
            root: None,
        }
    }
}

impl<N: ViewNode> ViewTree<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId<N>> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn insert_root(&mut self, node: N) -> SnapResult<NodeId<N>> {
        if self.root.is_some() {
            bail!("View tree already has a root");
        }
        let id = self.arena.insert(TreeEntry {
            node,
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(id);
        Ok(id)
    }

    pub fn add_child(&mut self, parent: NodeId<N>, node: N) -> SnapResult<NodeId<N>> {
        if !self.arena.contains(parent) {
            bail!("Parent node {:?} does not exist", parent);
        }
        let id = self.arena.insert(TreeEntry {
            node,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.arena[parent].children.push(id);
        Ok(id)
    }

    /// Removes `id` with all its descendants and returns its node.
    pub fn remove(&mut self, id: NodeId<N>) -> SnapResult<N> {
        let Some(entry) = self.arena.get(id) else {
            bail!("Node {:?} does not exist", id);
        };
        let parent = entry.parent;
        match parent {
            Some(parent) => self.arena[parent].children.retain(|child| *child != id),
            None => self.root = None,
        }
        let mut pending = vec![id];
        let mut removed = None;
        while let Some(next) = pending.pop() {
            if let Some(entry) = self.arena.remove(next) {
                pending.extend(entry.children);
                if next == id {
                    removed = Some(entry.node);
                }
            }
        }
        match removed {
            Some(node) => Ok(node),
            None => bail!("Node {:?} vanished during removal", id),
        }
    }

    /// Moves `id` in front of its siblings.
    pub fn bring_to_front(&mut self, id: NodeId<N>) -> SnapResult<()> {
        if !self.arena.contains(id) {
            bail!("Node {:?} does not exist", id);
        }
        let Some(parent) = self.parent(id) else {
            return Ok(());
        };
        let siblings = &mut self.arena[parent].children;
        siblings.retain(|child| *child != id);
        siblings.push(id);
        Ok(())
    }

    pub fn get(&self, id: NodeId<N>) -> Option<&N> {
        self.arena.get(id).map(|entry| &entry.node)
    }

    pub fn get_mut(&mut self, id: NodeId<N>) -> Option<&mut N> {
        self.arena.get_mut(id).map(|entry| &mut entry.node)
    }

    pub fn parent(&self, id: NodeId<N>) -> Option<NodeId<N>> {
        self.arena.get(id).and_then(|entry| entry.parent)
    }

    pub fn children(&self, id: NodeId<N>) -> &[NodeId<N>] {
        self.arena
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    /// The closest node matching `predicate`, starting at `id` itself and
    /// walking up through its parents.
    pub fn find_ancestor(
        &self,
        id: NodeId<N>,
        predicate: impl Fn(&N) -> bool,
    ) -> Option<NodeId<N>> {
        let mut current = Some(id);
        while let Some(candidate) = current {
            let entry = self.arena.get(candidate)?;
            if predicate(&entry.node) {
                return Some(candidate);
            }
            current = entry.parent;
        }
        None
    }

    /// Tells `id` and all its descendants, parents before children, that the
    /// device orientation changed.
    pub fn broadcast_orientation(&mut self, id: NodeId<N>, orientation: Orientation) {
        debug!("Broadcasting orientation {:?} from {:?}", orientation, id);
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let Some(entry) = self.arena.get_mut(next) else {
                continue;
            };
            entry.node.orientation_changed(orientation);
            pending.extend(entry.children.iter().rev());
        }
    }

    pub fn dump(&self, id: NodeId<N>) -> String {
        format!("{}", self.to_tree(id))
    }

    fn to_tree(&self, id: NodeId<N>) -> Tree<String> {
        let Some(entry) = self.arena.get(id) else {
            return Tree::new(format!("<missing {:?}>", id));
        };
        let mut tree = Tree::new(entry.node.label());
        for child in &entry.children {
            tree.push(self.to_tree(*child));
        }
        tree
    }
}
