//! DELETE operations for AvlTreeSet.
//!
//! Removal splices a node out directly when it has no right child or its right
//! child has no left child. Otherwise the in-order successor is pulled out of
//! the right subtree and put in the removed node's place. Balance is restored
//! on the way up from the splice point; unlike insertion this may rotate at
//! every level up to the root.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::hook::StructureHook;
use crate::iteration::Cursor;
use crate::navigation::minimum;
use crate::types::{AvlTreeSet, Side};
use tracing::{debug, trace};

impl<V, C: Comparator<V>, H: StructureHook<V>> AvlTreeSet<V, C, H> {
    /// Remove the element comparing equal to `value`. Returns whether one was
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let mut set: AvlTreeSet<i32> = (1..=5).collect();
    /// assert!(set.remove(&3));
    /// assert!(!set.remove(&3));
    /// assert_eq!(set.to_vec(), vec![1, 2, 4, 5]);
    /// ```
    pub fn remove(&mut self, value: &V) -> bool {
        self.take(value).is_some()
    }

    /// Remove and return the stored element comparing equal to `value`.
    pub fn take(&mut self, value: &V) -> Option<V> {
        let node = self.find_node(value);
        if node == NULL_NODE {
            return None;
        }
        Some(self.remove_node(node))
    }

    /// Remove every listed value, returning whether anything was removed.
    pub fn remove_all<'a, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove(value);
        }
        changed
    }

    /// Keep only the elements that compare equal to something in `keep`.
    ///
    /// Membership is a linear scan of `keep` per element.
    pub fn retain_all(&mut self, keep: &[V]) -> bool {
        let before = self.count;
        let mut cursor = self.cursor();
        while let Ok(true) = cursor.has_next(&*self) {
            let retained = match cursor.next(&*self) {
                Ok(value) => keep
                    .iter()
                    .any(|k| self.comparator.compare(k, value).is_eq()),
                Err(_) => break,
            };
            if !retained && cursor.remove(&mut *self).is_err() {
                break;
            }
        }
        self.count != before
    }

    /// Keep only the elements for which `keep` returns `true`, visiting them
    /// in ascending order.
    pub fn retain<F: FnMut(&V) -> bool>(&mut self, mut keep: F) {
        let mut cursor: Cursor = self.cursor();
        while let Ok(value) = cursor.next(&*self) {
            if !keep(value) && cursor.remove(&mut *self).is_err() {
                break;
            }
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        if self.count == 0 {
            return;
        }
        debug!(count = self.count, "clearing tree");
        self.arena.clear();
        self.root = NULL_NODE;
        self.count = 0;
        self.generation += 1;
        if H::ENABLED {
            self.hook.reset();
        }
    }

    /// Unlink `node` from the tree, rebalance, and hand back its value.
    pub(crate) fn remove_node(&mut self, node: NodeId) -> V {
        self.generation += 1;
        self.count -= 1;

        let parent = self.arena[node].parent;
        let left = self.arena[node].left;
        let right = self.arena[node].right;
        let balance = self.arena[node].balance;

        // `start` is the deepest node whose subtree lost height; the climb
        // begins there.
        let start = if right == NULL_NODE || self.arena[right].left == NULL_NODE {
            self.splice_out(node, parent, left, right, balance)
        } else {
            self.splice_successor(node, parent, left, right, balance)
        };
        trace!(node, start, "removed node");

        let removed = self
            .arena
            .deallocate(node)
            .expect("removed node should be allocated");
        if H::ENABLED {
            self.hook.release(node);
        }

        self.rebalance_after_remove(start);
        self.refresh_to_root(start);
        removed.value
    }

    /// Node without a right child, or whose right child has no left child:
    /// promote the remaining child into its place.
    fn splice_out(
        &mut self,
        node: NodeId,
        parent: NodeId,
        left: NodeId,
        right: NodeId,
        balance: i8,
    ) -> NodeId {
        let promoted = if right != NULL_NODE {
            // The right child adopts the left subtree; its own (empty) left
            // side was one shorter than the subtree it replaces.
            self.arena[right].parent = parent;
            self.arena[right].balance = balance - 1;
            self.arena[right].left = left;
            if left != NULL_NODE {
                self.arena[left].parent = right;
            }
            right
        } else if left != NULL_NODE {
            self.arena[left].parent = parent;
            self.arena[left].balance = balance + 1;
            left
        } else {
            NULL_NODE
        };

        if parent == NULL_NODE {
            self.root = promoted;
            return promoted;
        }

        let side = if self.arena[parent].left == node {
            self.arena[parent].left = promoted;
            Side::Left
        } else {
            self.arena[parent].right = promoted;
            Side::Right
        };

        if promoted != NULL_NODE {
            return promoted;
        }

        // A leaf went away; the parent itself lost weight on that side.
        match side {
            Side::Left => self.arena[parent].balance += 1,
            Side::Right => self.arena[parent].balance -= 1,
        }
        parent
    }

    /// Node with a right child that has a left child: move the in-order
    /// successor (leftmost in the right subtree, so it has no left child) into
    /// the node's position.
    fn splice_successor(
        &mut self,
        node: NodeId,
        parent: NodeId,
        left: NodeId,
        right: NodeId,
        balance: i8,
    ) -> NodeId {
        let successor = minimum(&self.arena, right);

        self.arena[successor].left = left;
        if left != NULL_NODE {
            self.arena[left].parent = successor;
        }

        // The successor is a left child here, so its parent loses left weight.
        let successor_parent = self.arena[successor].parent;
        let successor_right = self.arena[successor].right;
        self.arena[successor_parent].left = successor_right;
        if successor_right != NULL_NODE {
            self.arena[successor_right].parent = successor_parent;
        }
        self.arena[successor_parent].balance += 1;

        self.arena[successor].right = right;
        self.arena[right].parent = successor;
        self.arena[successor].balance = balance;

        self.arena[successor].parent = parent;
        self.replace_child(parent, node, successor);

        successor_parent
    }

    /// Climb from `node`, whose subtree just got shorter, restoring balance.
    ///
    /// Stops as soon as a subtree's height is unchanged (balance ±1). A single
    /// rotation over a heavy child with balance 0 also keeps the height and
    /// stops the climb; every other rotation shortens the subtree and the
    /// climb continues.
    fn rebalance_after_remove(&mut self, mut node: NodeId) {
        while node != NULL_NODE {
            match self.arena[node].balance {
                -1 | 1 => break,
                2 => {
                    let right = self.arena[node].right;
                    if self.arena[right].balance == -1 {
                        node = self.rotate_right_left(node);
                        self.settle_double_rotation(node);
                    } else {
                        self.rotate_left(node);
                        if self.arena[right].balance == 0 {
                            self.arena[right].balance = -1;
                            self.arena[node].balance = 1;
                            break;
                        }
                        self.arena[right].balance = 0;
                        self.arena[node].balance = 0;
                        node = right;
                    }
                }
                -2 => {
                    let left = self.arena[node].left;
                    if self.arena[left].balance == 1 {
                        node = self.rotate_left_right(node);
                        self.settle_double_rotation(node);
                    } else {
                        self.rotate_right(node);
                        if self.arena[left].balance == 0 {
                            self.arena[left].balance = 1;
                            self.arena[node].balance = -1;
                            break;
                        }
                        self.arena[left].balance = 0;
                        self.arena[node].balance = 0;
                        node = left;
                    }
                }
                _ => {}
            }

            // The subtree at `node` is one shorter; tell its parent.
            let parent = self.arena[node].parent;
            match self.side_of(node) {
                Some(Side::Left) => self.arena[parent].balance += 1,
                Some(Side::Right) => self.arena[parent].balance -= 1,
                None => {}
            }
            node = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeSet;

    fn assert_valid(tree: &AvlTreeSet<i32>) {
        if let Err(e) = tree.check_invariants_detailed() {
            panic!("invariants violated: {}", e);
        }
    }

    #[test]
    fn test_remove_leaf_root_and_missing() {
        let mut tree = AvlTreeSet::new();
        assert!(!tree.remove(&1));

        tree.insert(1);
        assert!(tree.remove(&1));
        assert!(tree.is_empty());
        assert!(tree.root_node().is_none());
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_node_with_right_child_without_left_grandchild() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([20, 10, 30, 40]);
        assert!(tree.remove(&30));
        assert_valid(&tree);
        assert_eq!(tree.to_vec(), vec![10, 20, 40]);
    }

    #[test]
    fn test_remove_node_with_only_left_child() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([20, 10, 30, 5]);
        assert!(tree.remove(&10));
        assert_valid(&tree);
        assert_eq!(tree.to_vec(), vec![5, 20, 30]);
    }

    #[test]
    fn test_remove_through_successor() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([50, 30, 70, 20, 40, 60, 80, 65]);
        assert!(tree.remove(&50));
        assert_valid(&tree);
        assert_eq!(*tree.root_node().unwrap().value(), 60);
        assert_eq!(tree.to_vec(), vec![20, 30, 40, 60, 65, 70, 80]);
    }

    #[test]
    fn test_remove_triggers_single_rotation_with_balanced_child() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([20, 10, 30, 25, 35]);
        assert!(tree.remove(&10));
        assert_valid(&tree);
        assert_eq!(*tree.root_node().unwrap().value(), 30);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_remove_triggers_double_rotation() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([20, 10, 30, 25]);
        assert!(tree.remove(&10));
        assert_valid(&tree);
        assert_eq!(*tree.root_node().unwrap().value(), 25);
    }

    #[test]
    fn test_remove_rebalances_more_than_once() {
        // Left-heavy at the root and at 11; dropping 12 rotates at 11 and
        // then again at the root.
        let mut tree = AvlTreeSet::new();
        tree.insert_all([8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        assert_valid(&tree);
        assert!(tree.remove(&12));
        assert_valid(&tree);
        assert_eq!(*tree.root_node().unwrap().value(), 5);
        assert!(tree.remove(&6));
        assert_valid(&tree);
    }

    #[test]
    fn test_take_returns_stored_element() {
        let mut tree = AvlTreeSet::with_comparator(crate::comparator::from_fn(
            |a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0),
        ));
        tree.insert((1, "stored"));
        assert_eq!(tree.take(&(1, "lookup")), Some((1, "stored")));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_bulk_remove_and_retain() {
        let mut tree: AvlTreeSet<i32> = (0..20).collect();
        assert!(tree.remove_all(&[1, 3, 5, 99]));
        assert!(!tree.remove_all(&[99]));
        assert_eq!(tree.len(), 17);

        assert!(tree.retain_all(&[0, 2, 4, 6, 8, 100]));
        assert_eq!(tree.to_vec(), vec![0, 2, 4, 6, 8]);
        assert!(!tree.retain_all(&[0, 2, 4, 6, 8]));

        tree.retain(|v| *v >= 4);
        assert_eq!(tree.to_vec(), vec![4, 6, 8]);
        assert_valid(&tree);
    }

    #[test]
    fn test_clear_bumps_generation_once() {
        let mut tree: AvlTreeSet<i32> = (0..10).collect();
        let generation = tree.generation();
        tree.clear();
        assert_eq!(tree.generation(), generation + 1);
        assert!(tree.is_empty());
        tree.clear();
        assert_eq!(tree.generation(), generation + 1);
        assert!(tree.insert(3));
        assert_eq!(tree.to_vec(), vec![3]);
    }
}
