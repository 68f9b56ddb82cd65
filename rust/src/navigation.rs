//! In-order navigation over the arena.
//!
//! These work on the arena alone so that borrowing iterators, which only hold
//! a reference to the arena, share them with the tree.

use crate::arena::{Arena, NodeId, NULL_NODE};
use crate::types::Node;

/// Leftmost node of the subtree at `node`.
pub(crate) fn minimum<V>(arena: &Arena<Node<V>>, mut node: NodeId) -> NodeId {
    if node == NULL_NODE {
        return NULL_NODE;
    }
    while arena[node].left != NULL_NODE {
        node = arena[node].left;
    }
    node
}

/// Rightmost node of the subtree at `node`.
pub(crate) fn maximum<V>(arena: &Arena<Node<V>>, mut node: NodeId) -> NodeId {
    if node == NULL_NODE {
        return NULL_NODE;
    }
    while arena[node].right != NULL_NODE {
        node = arena[node].right;
    }
    node
}

/// Next node in ascending order, or `NULL_NODE`.
pub(crate) fn successor<V>(arena: &Arena<Node<V>>, mut node: NodeId) -> NodeId {
    if arena[node].right != NULL_NODE {
        return minimum(arena, arena[node].right);
    }
    let mut parent = arena[node].parent;
    while parent != NULL_NODE && arena[parent].right == node {
        node = parent;
        parent = arena[node].parent;
    }
    parent
}

/// Previous node in ascending order, or `NULL_NODE`.
pub(crate) fn predecessor<V>(arena: &Arena<Node<V>>, mut node: NodeId) -> NodeId {
    if arena[node].left != NULL_NODE {
        return maximum(arena, arena[node].left);
    }
    let mut parent = arena[node].parent;
    while parent != NULL_NODE && arena[parent].left == node {
        node = parent;
        parent = arena[node].parent;
    }
    parent
}
