//! Construction and initialization logic for AvlTreeSet.
//!
//! A set is configured entirely at construction time: the order it sorts by,
//! the structure hook it notifies, and how many node slots to reserve up
//! front.

use crate::arena::{Arena, NULL_NODE};
use crate::comparator::{Comparator, NaturalOrder};
use crate::hook::StructureHook;
use crate::types::{next_source_id, AvlTreeSet, Node};
use std::fmt;

impl<V: Ord> AvlTreeSet<V> {
    /// Create an empty set ordered by `V`'s own [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create an empty set with room for `capacity` elements before the node
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(NaturalOrder, (), Arena::with_capacity(capacity))
    }
}

impl<V, C: Comparator<V>> AvlTreeSet<V, C> {
    /// Create an empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{comparator, AvlTreeSet};
    ///
    /// let mut set = AvlTreeSet::with_comparator(comparator::from_fn(|a: &i32, b: &i32| b.cmp(a)));
    /// set.insert_all([1, 3, 2]);
    /// assert_eq!(set.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::build(comparator, (), Arena::new())
    }
}

impl<V, C: Comparator<V>, H: StructureHook<V>> AvlTreeSet<V, C, H> {
    /// Create an empty set ordered by `comparator` that reports structural
    /// changes to `hook`.
    pub fn with_hook(comparator: C, hook: H) -> Self {
        Self::build(comparator, hook, Arena::new())
    }

    fn build(comparator: C, hook: H, arena: Arena<Node<V>>) -> Self {
        Self {
            root: NULL_NODE,
            count: 0,
            generation: 0,
            id: next_source_id(),
            comparator,
            hook,
            arena,
        }
    }

    /// The order this set sorts by.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Mutable access to the hook. Changing the hook's idea of the tree is the
    /// caller's business.
    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }
}

impl<V: Clone, C: Clone, H: Clone> Clone for AvlTreeSet<V, C, H> {
    /// A deep copy with its own identity, so cursors taken from `self` are
    /// not accepted by the copy.
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            count: self.count,
            generation: self.generation,
            id: next_source_id(),
            comparator: self.comparator.clone(),
            hook: self.hook.clone(),
            arena: self.arena.clone(),
        }
    }
}

impl<V: Ord> Default for AvlTreeSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord> FromIterator<V> for AvlTreeSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_all(iter);
        set
    }
}

impl<V, C: Comparator<V>, H: StructureHook<V>> Extend<V> for AvlTreeSet<V, C, H> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<V: fmt::Debug, C, H> fmt::Debug for AvlTreeSet<V, C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
