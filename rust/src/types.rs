//! Core types and data structures for AvlTreeSet.

use crate::arena::{Arena, NodeId, NULL_NODE};
use crate::comparator::NaturalOrder;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// A process-wide unique, nonzero id for a tree or range view.
pub(crate) fn next_source_id() -> u64 {
    NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed)
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// An ordered set kept as an AVL tree.
///
/// Elements are unique under the comparator `C`: two values that compare
/// `Equal` are the same element. Nodes live in an [`Arena`] and link to each
/// other by index, so the parent back-links are purely navigational.
///
/// # Type Parameters
///
/// * `V` - Element type
/// * `C` - Total order over `V`, [`NaturalOrder`] by default
/// * `H` - [`StructureHook`](crate::StructureHook) notified of structural
///   changes, disabled (`()`) by default
///
/// # Examples
///
/// ```
/// use avltree::AvlTreeSet;
///
/// let mut set = AvlTreeSet::new();
/// set.insert(30);
/// set.insert(10);
/// set.insert(20);
/// assert!(!set.insert(20));
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.first(), Some(&10));
/// assert_eq!(set.to_vec(), vec![10, 20, 30]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n), at most one rotation
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n), may rotate at every level
/// - **Range views**: O(log n) to position, O(k) to walk
pub struct AvlTreeSet<V, C = NaturalOrder, H = ()> {
    /// The root node, or `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Number of elements.
    pub(crate) count: usize,
    /// Bumped on every structural change; cursors and views compare against it.
    pub(crate) generation: u64,
    /// Identity checked by cursors; a clone gets its own.
    pub(crate) id: u64,
    pub(crate) comparator: C,
    pub(crate) hook: H,
    pub(crate) arena: Arena<Node<V>>,
}

/// A tree node.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) value: V,
    /// Height of the right subtree minus height of the left subtree.
    pub(crate) balance: i8,
}

impl<V> Node<V> {
    pub(crate) fn leaf(value: V, parent: NodeId) -> Self {
        Self {
            parent,
            left: NULL_NODE,
            right: NULL_NODE,
            value,
            balance: 0,
        }
    }
}

/// Rounding policy for [`AvlTreeSet::search_nearest`] when there is no exact
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchNearest {
    /// The greatest element below the target.
    RoundedDown,
    /// Whichever neighbour is closer by [`Comparator::distance`], ties going
    /// to the lower one.
    ///
    /// [`Comparator::distance`]: crate::Comparator::distance
    Absolute,
    /// The least element above the target.
    RoundedUp,
}

/// Which child link of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}
