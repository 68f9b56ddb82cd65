//! Rotations and the link surgery shared by insertion and deletion.
//!
//! Rotations only reassign indices. They leave balance factors alone; the
//! caller knows which case it is in and sets them afterwards.

use crate::arena::{NodeId, NULL_NODE};
use crate::hook::{NodeRef, StructureHook};
use crate::types::{AvlTreeSet, Side};
use tracing::trace;

impl<V, C, H: StructureHook<V>> AvlTreeSet<V, C, H> {
    /// Which side of its parent `node` hangs from. `None` for the root.
    pub(crate) fn side_of(&self, node: NodeId) -> Option<Side> {
        let parent = self.arena[node].parent;
        if parent == NULL_NODE {
            None
        } else if self.arena[parent].left == node {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Point whatever referenced `old` (its parent's child link, or the root)
    /// at `new`. Does not touch `new.parent`.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NULL_NODE {
            self.root = new;
        } else if self.arena[parent].left == old {
            self.arena[parent].left = new;
        } else {
            self.arena[parent].right = new;
        }
    }

    /// Rotate `node` down to the right of its left child.
    ///
    /// ```text
    ///        N              Y
    ///       / \            / \
    ///      Y   A    ==>   Z   N
    ///     / \                / \
    ///    Z   B              B   A
    /// ```
    pub(crate) fn rotate_right(&mut self, node: NodeId) -> NodeId {
        let y = self.arena[node].left;
        debug_assert_ne!(y, NULL_NODE, "rotate_right needs a left child");
        trace!(node, pivot = y, "rotate right");

        let b = self.arena[y].right;
        self.arena[node].left = b;
        if b != NULL_NODE {
            self.arena[b].parent = node;
        }

        let parent = self.arena[node].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, node, y);

        self.arena[y].right = node;
        self.arena[node].parent = y;

        self.refresh_node(node);
        self.refresh_node(y);
        y
    }

    /// Rotate `node` down to the left of its right child.
    ///
    /// ```text
    ///      N                  Y
    ///     / \                / \
    ///    A   Y      ==>     N   Z
    ///       / \            / \
    ///      B   Z          A   B
    /// ```
    pub(crate) fn rotate_left(&mut self, node: NodeId) -> NodeId {
        let y = self.arena[node].right;
        debug_assert_ne!(y, NULL_NODE, "rotate_left needs a right child");
        trace!(node, pivot = y, "rotate left");

        let b = self.arena[y].left;
        self.arena[node].right = b;
        if b != NULL_NODE {
            self.arena[b].parent = node;
        }

        let parent = self.arena[node].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, node, y);

        self.arena[y].left = node;
        self.arena[node].parent = y;

        self.refresh_node(node);
        self.refresh_node(y);
        y
    }

    /// Lift `node.right.left` above both `node` and `node.right`.
    pub(crate) fn rotate_right_left(&mut self, node: NodeId) -> NodeId {
        let right = self.arena[node].right;
        self.rotate_right(right);
        self.rotate_left(node)
    }

    /// Lift `node.left.right` above both `node.left` and `node`.
    pub(crate) fn rotate_left_right(&mut self, node: NodeId) -> NodeId {
        let left = self.arena[node].left;
        self.rotate_left(left);
        self.rotate_right(node)
    }

    /// Settle balance factors after a double rotation lifted `middle`.
    ///
    /// `middle` still carries the balance it had before the rotation; its new
    /// children take the heights of its old subtrees.
    pub(crate) fn settle_double_rotation(&mut self, middle: NodeId) {
        let (left, right) = match self.arena[middle].balance {
            1 => (-1, 0),
            0 => (0, 0),
            _ => (0, 1),
        };
        let left_id = self.arena[middle].left;
        let right_id = self.arena[middle].right;
        self.arena[left_id].balance = left;
        self.arena[right_id].balance = right;
        self.arena[middle].balance = 0;
    }

    #[inline]
    pub(crate) fn refresh_node(&mut self, node: NodeId) {
        if !H::ENABLED {
            return;
        }
        if let Some(node_ref) = NodeRef::new(&self.arena, node) {
            self.hook.refresh(node_ref);
        }
    }

    /// Refresh `node` and each of its ancestors, bottom-up.
    pub(crate) fn refresh_to_root(&mut self, mut node: NodeId) {
        if !H::ENABLED {
            return;
        }
        while node != NULL_NODE {
            self.refresh_node(node);
            node = self.arena[node].parent;
        }
    }
}
