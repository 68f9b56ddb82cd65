//! Notifications about structural changes, for layers that keep per-node
//! summaries on top of the tree.
//!
//! An interval layer, for example, keeps the largest end point of every
//! subtree in a side table keyed by [`NodeId`]. The tree calls
//! [`StructureHook::refresh`] children-first for every node whose subtree
//! changed: each rotation refreshes the demoted node and then the promoted
//! one, and after every insert or remove the path from the deepest changed
//! node up to the root is refreshed. Node ids stay stable for as long as the
//! node is in the tree.

use crate::arena::{Arena, NodeId, NULL_NODE};
use crate::types::Node;

/// Receives structural change notifications from an
/// [`AvlTreeSet`](crate::AvlTreeSet).
pub trait StructureHook<V> {
    /// Whether the tree should bother walking nodes for this hook.
    const ENABLED: bool = true;

    /// The subtree rooted at `node` changed shape or content.
    ///
    /// Every child has been refreshed at least once before. A node may be
    /// refreshed several times in one operation; its last refresh always comes
    /// after the last refresh of each of its children.
    fn refresh(&mut self, node: NodeRef<'_, V>);

    /// `id` left the tree; its slot may be reused by a later insert.
    fn release(&mut self, _id: NodeId) {}

    /// Every node left the tree at once.
    fn reset(&mut self) {}
}

/// The disabled hook.
impl<V> StructureHook<V> for () {
    const ENABLED: bool = false;

    #[inline]
    fn refresh(&mut self, _node: NodeRef<'_, V>) {}
}

/// Read-only handle to a node inside the tree.
pub struct NodeRef<'a, V> {
    arena: &'a Arena<Node<V>>,
    id: NodeId,
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<V: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("balance", &self.balance_factor())
            .finish()
    }
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(arena: &'a Arena<Node<V>>, id: NodeId) -> Option<Self> {
        arena.contains(id).then_some(Self { arena, id })
    }

    fn node(&self) -> &'a Node<V> {
        &self.arena[self.id]
    }

    fn link(&self, id: NodeId) -> Option<NodeRef<'a, V>> {
        if id == NULL_NODE {
            None
        } else {
            NodeRef::new(self.arena, id)
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// Height of the right subtree minus height of the left subtree.
    pub fn balance_factor(&self) -> i8 {
        self.node().balance
    }

    pub fn left(&self) -> Option<NodeRef<'a, V>> {
        self.link(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, V>> {
        self.link(self.node().right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, V>> {
        self.link(self.node().parent)
    }
}
