//! Nearest-element search for AvlTreeSet.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::navigation::{predecessor, successor};
use crate::types::{AvlTreeSet, SearchNearest};
use std::cmp::Ordering;

impl<V, C: Comparator<V>, H> AvlTreeSet<V, C, H> {
    /// Find `value`, or the element next to where it would be.
    ///
    /// An exact match is returned whatever the mode. Otherwise
    /// [`RoundedUp`](SearchNearest::RoundedUp) gives the least greater
    /// element, [`RoundedDown`](SearchNearest::RoundedDown) the greatest
    /// smaller one, and [`Absolute`](SearchNearest::Absolute) whichever of the
    /// two is closer by [`Comparator::distance`], preferring the smaller one
    /// on ties. `Absolute` is only meaningful for orders whose distance tracks
    /// the real gap between elements (numbers, not arbitrary orders); without
    /// a distance it always rounds down when both neighbours exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeSet, NumericOrder, SearchNearest};
    ///
    /// let mut set = AvlTreeSet::<i64, _>::with_comparator(NumericOrder);
    /// set.insert_all([100, 200, 300]);
    ///
    /// assert_eq!(set.search_nearest(&150, SearchNearest::RoundedUp), Some(&200));
    /// assert_eq!(set.search_nearest(&150, SearchNearest::RoundedDown), Some(&100));
    /// assert_eq!(set.search_nearest(&149, SearchNearest::Absolute), Some(&100));
    /// assert_eq!(set.search_nearest(&151, SearchNearest::Absolute), Some(&200));
    /// ```
    pub fn search_nearest(&self, value: &V, mode: SearchNearest) -> Option<&V> {
        let node = self.search_nearest_node(value, mode);
        self.arena.get(node).map(|n| &n.value)
    }

    /// [`search_nearest`](Self::search_nearest) with
    /// [`SearchNearest::Absolute`].
    pub fn search_nearest_absolute(&self, value: &V) -> Option<&V> {
        self.search_nearest(value, SearchNearest::Absolute)
    }

    pub(crate) fn search_nearest_node(&self, value: &V, mode: SearchNearest) -> NodeId {
        if self.root == NULL_NODE {
            return NULL_NODE;
        }

        // Descend as for a lookup, remembering the last node visited.
        let mut anchor = self.root;
        let mut node = self.root;
        let mut ordering = Ordering::Equal;
        while node != NULL_NODE {
            anchor = node;
            let current = &self.arena[node];
            ordering = self.comparator.compare(value, &current.value);
            node = match ordering {
                Ordering::Equal => return anchor,
                Ordering::Less => current.left,
                Ordering::Greater => current.right,
            };
        }

        let below = ordering == Ordering::Less;
        match mode {
            SearchNearest::RoundedUp if below => anchor,
            SearchNearest::RoundedUp => successor(&self.arena, anchor),
            SearchNearest::RoundedDown if below => predecessor(&self.arena, anchor),
            SearchNearest::RoundedDown => anchor,
            SearchNearest::Absolute => {
                // The target sits between the anchor and its neighbour on the
                // target's side.
                let other = if below {
                    predecessor(&self.arena, anchor)
                } else {
                    successor(&self.arena, anchor)
                };
                if other == NULL_NODE {
                    return anchor;
                }
                let (lower, upper) = if below { (other, anchor) } else { (anchor, other) };
                let to_lower = self.comparator.distance(value, &self.arena[lower].value);
                let to_upper = self.comparator.distance(value, &self.arena[upper].value);
                match (to_lower, to_upper) {
                    (Some(down), Some(up)) if up < down => upper,
                    _ => lower,
                }
            }
        }
    }
}
