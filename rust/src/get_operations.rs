//! GET operations for AvlTreeSet.
//!
//! Lookups descend from the root by comparator and only ever report exact
//! (comparator-equal) matches.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::navigation::{maximum, minimum};
use crate::types::AvlTreeSet;
use std::cmp::Ordering;

impl<V, C: Comparator<V>, H> AvlTreeSet<V, C, H> {
    /// Check whether an element comparing equal to `value` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.contains(&2));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains(&self, value: &V) -> bool {
        self.find_node(value) != NULL_NODE
    }

    /// Check whether every listed value is stored.
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// The stored element comparing equal to `value`.
    ///
    /// Useful when the comparator looks at only part of the element.
    pub fn get(&self, value: &V) -> Option<&V> {
        let node = self.find_node(value);
        if node == NULL_NODE {
            None
        } else {
            Some(&self.arena[node].value)
        }
    }

    /// Locate the node holding `value`, or `NULL_NODE`.
    pub(crate) fn find_node(&self, value: &V) -> NodeId {
        let mut node = self.root;
        while node != NULL_NODE {
            let current = &self.arena[node];
            node = match self.comparator.compare(value, &current.value) {
                Ordering::Equal => return node,
                Ordering::Less => current.left,
                Ordering::Greater => current.right,
            };
        }
        NULL_NODE
    }
}

impl<V, C, H> AvlTreeSet<V, C, H> {
    /// The smallest element.
    pub fn first(&self) -> Option<&V> {
        let node = minimum(&self.arena, self.root);
        self.arena.get(node).map(|n| &n.value)
    }

    /// The largest element.
    pub fn last(&self) -> Option<&V> {
        let node = maximum(&self.arena, self.root);
        self.arena.get(node).map(|n| &n.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::comparator::from_fn;
    use crate::AvlTreeSet;

    #[test]
    fn test_contains_and_get() {
        let tree: AvlTreeSet<i32> = (0..100).step_by(5).collect();
        assert!(tree.contains(&0));
        assert!(tree.contains(&95));
        assert!(!tree.contains(&3));
        assert!(tree.contains_all(&[10, 20, 30]));
        assert!(!tree.contains_all(&[10, 21]));
        assert_eq!(tree.get(&45), Some(&45));
        assert_eq!(tree.get(&46), None);
    }

    #[test]
    fn test_comparator_defines_identity() {
        // Intervals ordered by lower bound only: the same start is the same
        // element, whatever the end.
        let mut tree = AvlTreeSet::with_comparator(from_fn(|a: &(i64, i64), b: &(i64, i64)| {
            a.0.cmp(&b.0)
        }));
        assert!(tree.insert((100, 200)));
        assert!(!tree.insert((100, 999)));
        assert!(tree.contains(&(100, 0)));
        assert_eq!(tree.get(&(100, 0)), Some(&(100, 200)));
    }

    #[test]
    fn test_first_and_last() {
        let mut tree = AvlTreeSet::new();
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);

        tree.insert_all([40, 10, 30, 20]);
        assert_eq!(tree.first(), Some(&10));
        assert_eq!(tree.last(), Some(&40));
    }
}
