//! INSERT operations for AvlTreeSet.
//!
//! A new element always enters as a leaf. Balance factors are then fixed on
//! the way back up; insertion needs at most one (single or double) rotation.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::hook::StructureHook;
use crate::types::{AvlTreeSet, Node, Side};
use std::cmp::Ordering;

impl<V, C: Comparator<V>, H: StructureHook<V>> AvlTreeSet<V, C, H> {
    /// Add `value` to the set.
    ///
    /// Returns `false`, leaving the set untouched, if an element comparing
    /// equal is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::new();
    /// assert!(set.insert("b"));
    /// assert!(!set.insert("b"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: V) -> bool {
        if self.root == NULL_NODE {
            let id = self.arena.allocate(Node::leaf(value, NULL_NODE));
            self.root = id;
            self.count += 1;
            self.generation += 1;
            self.refresh_to_root(id);
            return true;
        }

        let (parent, side) = match self.find_insert_position(&value) {
            Some(position) => position,
            None => return false,
        };

        let id = self.arena.allocate(Node::leaf(value, parent));
        match side {
            Side::Left => {
                self.arena[parent].left = id;
                self.arena[parent].balance -= 1;
            }
            Side::Right => {
                self.arena[parent].right = id;
                self.arena[parent].balance += 1;
            }
        }
        self.count += 1;
        self.generation += 1;
        self.refresh_node(id);

        self.rebalance_after_insert(parent);
        let parent = self.arena[id].parent;
        self.refresh_to_root(parent);
        true
    }

    /// Add every value, returning whether any of them was new.
    pub fn insert_all<I: IntoIterator<Item = V>>(&mut self, values: I) -> bool {
        let mut modified = false;
        for value in values {
            modified |= self.insert(value);
        }
        modified
    }

    /// Descend to the empty link where `value` belongs. `None` if an equal
    /// element is already there.
    fn find_insert_position(&self, value: &V) -> Option<(NodeId, Side)> {
        let mut node = self.root;
        loop {
            let current = &self.arena[node];
            match self.comparator.compare(value, &current.value) {
                Ordering::Equal => return None,
                Ordering::Less if current.left == NULL_NODE => return Some((node, Side::Left)),
                Ordering::Less => node = current.left,
                Ordering::Greater if current.right == NULL_NODE => {
                    return Some((node, Side::Right))
                }
                Ordering::Greater => node = current.right,
            }
        }
    }

    /// Propagate the height change of a fresh leaf upward from its parent.
    ///
    /// Left additions count -1, right additions +1. The climb stops once a
    /// subtree's height is unchanged (balance back to 0) or after a rotation,
    /// which always restores the height the subtree had before the insert.
    fn rebalance_after_insert(&mut self, mut node: NodeId) {
        while self.arena[node].balance != 0 {
            let parent = self.arena[node].parent;
            if parent == NULL_NODE {
                break;
            }
            if self.arena[parent].left == node {
                self.arena[parent].balance -= 1;
            } else {
                self.arena[parent].balance += 1;
            }
            node = parent;

            match self.arena[node].balance {
                2 => {
                    let right = self.arena[node].right;
                    if self.arena[right].balance == 1 {
                        self.rotate_left(node);
                        self.arena[node].balance = 0;
                        self.arena[right].balance = 0;
                    } else {
                        let middle = self.rotate_right_left(node);
                        self.settle_double_rotation(middle);
                    }
                    break;
                }
                -2 => {
                    let left = self.arena[node].left;
                    if self.arena[left].balance == -1 {
                        self.rotate_right(node);
                        self.arena[node].balance = 0;
                        self.arena[left].balance = 0;
                    } else {
                        let middle = self.rotate_left_right(node);
                        self.settle_double_rotation(middle);
                    }
                    break;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeSet;

    fn root_value(tree: &AvlTreeSet<i32>) -> i32 {
        *tree.root_node().unwrap().value()
    }

    #[test]
    fn test_single_left_rotation() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([100, 200, 300]);
        tree.check_invariants_detailed().unwrap();
        assert_eq!(root_value(&tree), 200);
    }

    #[test]
    fn test_single_right_rotation() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([300, 200, 100]);
        tree.check_invariants_detailed().unwrap();
        assert_eq!(root_value(&tree), 200);
    }

    #[test]
    fn test_right_left_rotation() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([10, 200, 15]);
        tree.check_invariants_detailed().unwrap();
        assert_eq!(root_value(&tree), 15);
    }

    #[test]
    fn test_left_right_rotation() {
        let mut tree = AvlTreeSet::new();
        tree.insert_all([300, 100, 200]);
        tree.check_invariants_detailed().unwrap();
        assert_eq!(root_value(&tree), 200);
    }

    #[test]
    fn test_double_rotation_with_heavy_middle() {
        // 70 ends up left-heavy by two. 55 needs a single rotation; 61 and 65
        // go through 62 with it leaning left and right respectively.
        for extra in [55, 61, 65] {
            let mut tree = AvlTreeSet::new();
            tree.insert_all([50, 30, 70, 20, 40, 60, 80, 10]);
            tree.insert_all([62, 58]);
            tree.insert(extra);
            tree.check_invariants_detailed().unwrap();
        }
    }

    #[test]
    fn test_duplicate_does_not_bump_generation() {
        let mut tree = AvlTreeSet::new();
        assert!(tree.insert(1));
        let generation = tree.generation();
        assert!(!tree.insert(1));
        assert_eq!(tree.generation(), generation);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_ascending_inserts_stay_logarithmic() {
        let mut tree = AvlTreeSet::new();
        for i in 0..1023 {
            tree.insert(i);
        }
        tree.check_invariants_detailed().unwrap();
        assert_eq!(tree.height(), 10);
    }
}
