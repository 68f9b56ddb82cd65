//! Iterator implementations for AvlTreeSet.
//!
//! Two flavours: [`Iter`] borrows the tree and is an ordinary double-ended
//! std iterator, while [`Cursor`] holds no borrow at all. A cursor is handed
//! its source on every call, so the tree can change between calls; it notices
//! by comparing generations and reports
//! [`ConcurrentModification`](AvlTreeError::ConcurrentModification). Its own
//! [`Cursor::remove`] is the one mutation it tolerates. A cursor only accepts
//! the tree or view it was taken from; any other source is an
//! [`IllegalState`](AvlTreeError::IllegalState).

use crate::arena::{Arena, NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::{AvlResult, AvlTreeError};
use crate::hook::StructureHook;
use crate::navigation::{maximum, minimum, predecessor, successor};
use crate::types::{AvlTreeSet, Node};
use std::iter::FusedIterator;
use std::ops::Bound;
use tracing::debug;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Ascending iterator over the elements of a set or range view.
pub struct Iter<'a, V> {
    arena: &'a Arena<Node<V>>,
    front: NodeId,
    back: NodeId,
}

/// A detached position in a tree or range view.
///
/// ```
/// use avltree::AvlTreeSet;
///
/// let mut set: AvlTreeSet<i32> = (1..=6).collect();
/// let mut cursor = set.cursor();
/// while cursor.has_next(&set).unwrap() {
///     if cursor.next(&set).unwrap() % 2 == 0 {
///         cursor.remove(&mut set).unwrap();
///     }
/// }
/// assert_eq!(set.to_vec(), vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    current: NodeId,
    last: NodeId,
    expected_generation: u64,
    tree_id: u64,
    window_id: u64,
}

// ============================================================================
// CURSOR SOURCES
// ============================================================================

/// Something a [`Cursor`] can walk: a tree, or a window onto one.
pub trait CursorSource {
    type Value;
    type Order: Comparator<Self::Value>;
    type Hook: StructureHook<Self::Value>;

    /// The tree holding the elements.
    fn backing(&self) -> &AvlTreeSet<Self::Value, Self::Order, Self::Hook>;

    /// Where the walk ends.
    fn upper_bound(&self) -> Bound<&Self::Value> {
        Bound::Unbounded
    }

    /// Which window onto [`backing`](Self::backing) this is. Zero for the
    /// whole tree.
    fn window_id(&self) -> u64 {
        0
    }
}

/// A [`CursorSource`] that lets a cursor remove what it just returned.
pub trait CursorSourceMut: CursorSource {
    fn backing_mut(&mut self) -> &mut AvlTreeSet<Self::Value, Self::Order, Self::Hook>;
}

impl<V, C: Comparator<V>, H: StructureHook<V>> CursorSource for AvlTreeSet<V, C, H> {
    type Value = V;
    type Order = C;
    type Hook = H;

    fn backing(&self) -> &AvlTreeSet<V, C, H> {
        self
    }
}

impl<V, C: Comparator<V>, H: StructureHook<V>> CursorSourceMut for AvlTreeSet<V, C, H> {
    fn backing_mut(&mut self) -> &mut AvlTreeSet<V, C, H> {
        self
    }
}

// ============================================================================
// AVLTREESET ITERATOR METHODS
// ============================================================================

impl<V, C, H> AvlTreeSet<V, C, H> {
    /// Returns an iterator over all elements in ascending order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(
            &self.arena,
            minimum(&self.arena, self.root),
            maximum(&self.arena, self.root),
        )
    }

    /// Returns a cursor positioned before the smallest element.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(minimum(&self.arena, self.root), self.generation, self.id, 0)
    }
}

impl<'a, V, C, H> IntoIterator for &'a AvlTreeSet<V, C, H> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, V> Iter<'a, V> {
    /// Walk from `front` to `back` inclusive. Either end missing means empty.
    pub(crate) fn new(arena: &'a Arena<Node<V>>, front: NodeId, back: NodeId) -> Self {
        if front == NULL_NODE || back == NULL_NODE {
            return Self {
                arena,
                front: NULL_NODE,
                back: NULL_NODE,
            };
        }
        Self { arena, front, back }
    }

    fn finish(&mut self) {
        self.front = NULL_NODE;
        self.back = NULL_NODE;
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.front)?;
        if self.front == self.back {
            self.finish();
        } else {
            self.front = successor(self.arena, self.front);
        }
        Some(&node.value)
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.back)?;
        if self.front == self.back {
            self.finish();
        } else {
            self.back = predecessor(self.arena, self.back);
        }
        Some(&node.value)
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
        }
    }
}

// ============================================================================
// CURSOR IMPLEMENTATION
// ============================================================================

impl Cursor {
    pub(crate) fn new(start: NodeId, generation: u64, tree_id: u64, window_id: u64) -> Self {
        Self {
            current: start,
            last: NULL_NODE,
            expected_generation: generation,
            tree_id,
            window_id,
        }
    }

    fn check_generation<S: CursorSource + ?Sized>(&self, source: &S) -> AvlResult<()> {
        let tree_id = source.backing().id;
        let window_id = source.window_id();
        if tree_id != self.tree_id || window_id != self.window_id {
            debug!(
                expected_tree = self.tree_id,
                tree_id,
                expected_window = self.window_id,
                window_id,
                "cursor handed a foreign source"
            );
            return Err(AvlTreeError::illegal_state(
                "use cursor",
                "with a tree or view it was not taken from",
            ));
        }
        let actual = source.backing().generation;
        if actual == self.expected_generation {
            return Ok(());
        }
        debug!(
            expected = self.expected_generation,
            actual, "cursor detected concurrent modification"
        );
        Err(AvlTreeError::concurrent_modification(
            self.expected_generation,
            actual,
        ))
    }

    /// Whether [`next`](Self::next) has an element to return.
    pub fn has_next<S: CursorSource + ?Sized>(&self, source: &S) -> AvlResult<bool> {
        self.check_generation(source)?;
        Ok(self.current != NULL_NODE)
    }

    /// Return the element under the cursor and step past it.
    pub fn next<'s, S: CursorSource + ?Sized>(
        &mut self,
        source: &'s S,
    ) -> AvlResult<&'s S::Value> {
        self.check_generation(source)?;
        let tree = source.backing();
        let node = tree
            .arena
            .get(self.current)
            .ok_or(AvlTreeError::NoSuchElement)?;

        self.last = self.current;
        self.current = successor(&tree.arena, self.current);
        if let Some(following) = tree.arena.get(self.current) {
            let inside = match source.upper_bound() {
                Bound::Included(upper) => tree.comparator.compare(&following.value, upper).is_le(),
                Bound::Excluded(upper) => tree.comparator.compare(&following.value, upper).is_lt(),
                Bound::Unbounded => true,
            };
            if !inside {
                self.current = NULL_NODE;
            }
        }
        Ok(&node.value)
    }

    /// Remove the element last returned by [`next`](Self::next) from the
    /// backing tree and hand it back. The cursor stays usable afterwards.
    pub fn remove<S: CursorSourceMut + ?Sized>(&mut self, source: &mut S) -> AvlResult<S::Value> {
        self.check_generation(&*source)?;
        if self.last == NULL_NODE {
            return Err(AvlTreeError::illegal_state(
                "remove",
                "before next() or twice for the same element",
            ));
        }
        let tree = source.backing_mut();
        let value = tree.remove_node(self.last);
        self.last = NULL_NODE;
        self.expected_generation = tree.generation;
        Ok(value)
    }
}
