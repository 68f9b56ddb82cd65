//! Validation and debugging utilities for AvlTreeSet.
//!
//! These walk the whole tree and are meant for tests and debugging, not for
//! hot paths.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::{AvlResult, AvlResultExt, AvlTreeError, TreeResult};
use crate::types::AvlTreeSet;
use tracing::debug;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<V, C: Comparator<V>, H> AvlTreeSet<V, C, H> {
    /// Check if the tree maintains AVL invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        match self.check_invariants_detailed() {
            Ok(()) => true,
            Err(error) => {
                debug!(%error, "tree invariants violated");
                false
            }
        }
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies parent links, that every balance factor equals the height
    /// difference of its subtrees and lies in -1..=1, strict ascending order
    /// under the comparator, and that the element count matches both the
    /// reachable nodes and the live arena slots.
    pub fn check_invariants_detailed(&self) -> AvlResult<()> {
        if self.root != NULL_NODE && self.arena[self.root].parent != NULL_NODE {
            return Err(AvlTreeError::corrupted_tree(
                "Root",
                &format!("node {} has a parent", self.root),
            ));
        }

        let mut visited = 0;
        self.check_subtree(self.root, &mut visited)
            .with_operation("check structure")?;
        self.check_ordering().with_operation("check ordering")?;
        self.check_counts(visited).with_operation("check counts")
    }

    /// Returns the subtree height. Bails out after visiting more nodes than
    /// the arena holds, which only happens when links form a cycle.
    fn check_subtree(&self, node: NodeId, visited: &mut usize) -> TreeResult<usize> {
        if node == NULL_NODE {
            return Ok(0);
        }
        let current = self.arena.get(node).ok_or_else(|| {
            AvlTreeError::corrupted_tree("Link", &format!("node {} is not allocated", node))
        })?;
        *visited += 1;
        if *visited > self.arena.len() {
            return Err(AvlTreeError::corrupted_tree(
                "Link",
                &format!("cycle through node {}", node),
            ));
        }

        for child in [current.left, current.right] {
            if child == NULL_NODE {
                continue;
            }
            let parent = self.arena.get(child).map(|c| c.parent);
            if parent != Some(node) {
                return Err(AvlTreeError::corrupted_tree(
                    "Parent link",
                    &format!("child {} of node {} points to {:?}", child, node, parent),
                ));
            }
        }

        let left = self.check_subtree(current.left, visited)?;
        let right = self.check_subtree(current.right, visited)?;
        let difference = right as i64 - left as i64;
        if difference != i64::from(current.balance) {
            return Err(AvlTreeError::corrupted_tree(
                "Balance",
                &format!(
                    "node {} records {} but its subtrees differ by {}",
                    node, current.balance, difference
                ),
            ));
        }
        if !(-1..=1).contains(&difference) {
            return Err(AvlTreeError::corrupted_tree(
                "Balance",
                &format!("node {} is out of balance by {}", node, difference),
            ));
        }
        Ok(1 + left.max(right))
    }

    fn check_ordering(&self) -> TreeResult<()> {
        let mut previous: Option<&V> = None;
        for (index, value) in self.iter().enumerate() {
            if let Some(previous) = previous {
                if !self.comparator.compare(previous, value).is_lt() {
                    return Err(AvlTreeError::data_integrity(
                        "Ordering",
                        &format!("element {} is not greater than its predecessor", index),
                    ));
                }
            }
            previous = Some(value);
        }
        Ok(())
    }

    fn check_counts(&self, reachable: usize) -> TreeResult<()> {
        if reachable != self.count {
            return Err(AvlTreeError::data_integrity(
                "Count",
                &format!("{} reachable nodes but count is {}", reachable, self.count),
            ));
        }
        if self.arena.len() != self.count {
            return Err(AvlTreeError::data_integrity(
                "Arena",
                &format!(
                    "{} allocated slots but count is {}",
                    self.arena.len(),
                    self.count
                ),
            ));
        }
        Ok(())
    }
}
