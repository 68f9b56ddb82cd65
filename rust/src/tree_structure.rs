//! Tree structure queries and snapshots for AvlTreeSet.

use crate::arena::{ArenaStats, NodeId, NULL_NODE};
use crate::error::{AvlResult, AvlTreeError};
use crate::hook::NodeRef;
use crate::types::AvlTreeSet;

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<V, C, H> AvlTreeSet<V, C, H> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Structural modification counter. Goes up on every insert, remove and
    /// non-empty clear, never down.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    pub(crate) fn height_of(&self, node: NodeId) -> usize {
        if node == NULL_NODE {
            return 0;
        }
        let n = &self.arena[node];
        1 + self.height_of(n.left).max(self.height_of(n.right))
    }

    /// Handle to the root node, for walking the raw structure.
    pub fn root_node(&self) -> Option<NodeRef<'_, V>> {
        NodeRef::new(&self.arena, self.root)
    }

    /// Get arena statistics
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}

impl<V: Clone, C, H> AvlTreeSet<V, C, H> {
    /// Copy every element, in ascending order, into a new vector.
    pub fn to_vec(&self) -> Vec<V> {
        let mut out = Vec::with_capacity(self.count);
        out.extend(self.iter().cloned());
        out
    }

    /// Copy every element in ascending order to the front of `dst` and
    /// return how many were written. Slots past that are left alone.
    ///
    /// A `dst` shorter than [`len`](Self::len) is rejected with
    /// [`InvalidArgument`](AvlTreeError::InvalidArgument) and nothing is
    /// written.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = [3, 1, 2].into_iter().collect();
    /// let mut buf = [0; 5];
    /// assert_eq!(set.copy_to_slice(&mut buf), Ok(3));
    /// assert_eq!(buf, [1, 2, 3, 0, 0]);
    /// assert!(set.copy_to_slice(&mut [0; 2]).is_err());
    /// ```
    pub fn copy_to_slice(&self, dst: &mut [V]) -> AvlResult<usize> {
        if dst.len() < self.count {
            return Err(AvlTreeError::buffer_too_small(self.count, dst.len()));
        }
        for (slot, value) in dst.iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(self.count)
    }

    /// Append every element in ascending order to `dst`.
    pub fn extend_into<E: Extend<V>>(&self, dst: &mut E) {
        dst.extend(self.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use crate::{AvlTreeError, AvlTreeSet};

    #[test]
    fn test_snapshot_round_trip() {
        let original: AvlTreeSet<i32> = [17, 4, 99, -3, 42, 8].into_iter().collect();
        let snapshot = original.to_vec();
        let rebuilt: AvlTreeSet<i32> = snapshot.iter().copied().collect();
        assert_eq!(rebuilt.to_vec(), snapshot);
        assert_eq!(snapshot, vec![-3, 4, 8, 17, 42, 99]);
    }

    #[test]
    fn test_copy_to_short_slice_is_rejected() {
        let tree: AvlTreeSet<i32> = (1..=10).collect();
        let mut buf = [0; 4];
        assert!(matches!(
            tree.copy_to_slice(&mut buf),
            Err(AvlTreeError::InvalidArgument(_))
        ));
        assert_eq!(buf, [0; 4]);

        let mut exact = [0; 10];
        assert_eq!(tree.copy_to_slice(&mut exact), Ok(10));
        assert_eq!(exact.to_vec(), tree.to_vec());
    }

    #[test]
    fn test_extend_into_appends_everything() {
        let tree: AvlTreeSet<i32> = (1..=10).rev().collect();
        let mut out = vec![-1];
        tree.extend_into(&mut out);
        assert_eq!(out, vec![-1, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_height_and_root() {
        let mut tree = AvlTreeSet::new();
        assert_eq!(tree.height(), 0);
        assert!(tree.root_node().is_none());

        tree.insert_all(1..=3);
        assert_eq!(tree.height(), 2);
        let root = tree.root_node().unwrap();
        assert_eq!(*root.value(), 2);
        assert_eq!(*root.left().unwrap().value(), 1);
        assert_eq!(*root.right().unwrap().value(), 3);
        assert_eq!(root.right().unwrap().parent().unwrap().id(), root.id());
        assert_eq!(root.balance_factor(), 0);
    }

    #[test]
    fn test_arena_slots_track_len() {
        let mut tree: AvlTreeSet<i32> = (0..50).collect();
        for i in (0..50).step_by(2) {
            tree.remove(&i);
        }
        let stats = tree.arena_stats();
        assert_eq!(stats.allocated_count, tree.len());
        assert_eq!(stats.free_count, 25);
    }
}
