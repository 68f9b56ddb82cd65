//! Slot arena that owns every tree node.
//!
//! Nodes refer to each other through [`NodeId`] indices instead of pointers, so
//! parent back-links carry no ownership and rotations are plain index
//! reassignment. Freed slots go on a free list and are reused by later
//! allocations.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Index of a slot in the arena.
pub type NodeId = u32;

/// Sentinel for an absent link.
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for an arena
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Arena allocator with a free list for slot reuse.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    storage: Vec<Option<T>>,
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let id = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = Some(item);
            slot_id(free_index)
        } else {
            let id = slot_id(self.storage.len());
            self.storage.push(Some(item));
            id
        };
        self.allocated += 1;
        id
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        let item = self.storage.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(usize::try_from(id).ok()?)?.as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get_mut(usize::try_from(id).ok()?)?.as_mut()
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.allocated
    }

    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Drop every item and forget all slots.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("arena slot {} is not allocated", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("arena slot {} is not allocated", id),
        }
    }
}

/// The id for slot `index`. `NULL_NODE` is never handed out.
fn slot_id(index: usize) -> NodeId {
    match NodeId::try_from(index) {
        Ok(id) if id != NULL_NODE => id,
        _ => panic!("arena exhausted the NodeId space at slot {}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_get() {
        let mut arena = Arena::new();
        let a = arena.allocate("a");
        let b = arena.allocate("b");

        assert_ne!(a, b);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena[b], "b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(NULL_NODE), None);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.allocate(1);
        let _b = arena.allocate(2);

        assert_eq!(arena.deallocate(a), Some(1));
        assert!(!arena.contains(a));
        assert_eq!(arena.deallocate(a), None);
        assert_eq!(arena.stats().free_count, 1);

        let c = arena.allocate(3);
        assert_eq!(c, a);
        assert_eq!(arena[c], 3);
        assert_eq!(arena.stats().free_count, 0);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_clear_resets_stats() {
        let mut arena = Arena::with_capacity(8);
        for i in 0..5 {
            arena.allocate(i);
        }
        arena.deallocate(2);
        arena.clear();

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 0);
        assert_eq!(stats.free_count, 0);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_slot_ids_below_the_sentinel() {
        assert_eq!(slot_id(0), 0);
        assert_eq!(slot_id(NULL_NODE as usize - 1), NULL_NODE - 1);
    }

    #[test]
    #[should_panic(expected = "arena exhausted")]
    fn test_sentinel_slot_is_never_an_id() {
        slot_id(NULL_NODE as usize);
    }

    #[test]
    #[should_panic(expected = "not allocated")]
    fn test_index_of_freed_slot_panics() {
        let mut arena = Arena::new();
        let a = arena.allocate(1);
        arena.deallocate(a);
        let _ = arena[a];
    }
}
