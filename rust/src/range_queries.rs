//! Range query operations for AvlTreeSet.
//!
//! A range view is a live window onto the tree: it owns only its bounds and
//! reads (or, for [`RangeViewMut`], writes) straight through to the backing
//! tree. Views borrow the tree, so a view can never outlive it, and a shared
//! view cannot observe a half-finished mutation.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::{AvlResult, AvlTreeError};
use crate::hook::StructureHook;
use crate::iteration::{CursorSource, CursorSourceMut, Iter};
use crate::navigation::{maximum, minimum, predecessor, successor};
use crate::types::{next_source_id, AvlTreeSet, SearchNearest};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, RangeBounds};

// ============================================================================
// BOUNDS
// ============================================================================

/// Lower and upper limits of a range view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds<V> {
    pub lower: Bound<V>,
    pub upper: Bound<V>,
}

impl<V> Bounds<V> {
    pub fn new(lower: Bound<V>, upper: Bound<V>) -> Self {
        Self { lower, upper }
    }

    pub fn as_refs(&self) -> (Bound<&V>, Bound<&V>) {
        (self.lower.as_ref(), self.upper.as_ref())
    }

    /// Whether `value` lies within both limits under `comparator`.
    pub fn admits<C: Comparator<V>>(&self, comparator: &C, value: &V) -> bool {
        let (lower, upper) = self.as_refs();
        above_lower(comparator, value, lower) && below_upper(comparator, value, upper)
    }
}

impl<V: Clone> Bounds<V> {
    /// The tighter of these bounds and the given ones, limit by limit. On
    /// equal values an exclusive limit is tighter than an inclusive one.
    pub fn intersect<C: Comparator<V>>(
        &self,
        comparator: &C,
        lower: Bound<V>,
        upper: Bound<V>,
    ) -> Self {
        let lower = tighter(comparator, self.lower.clone(), lower, Ordering::Greater);
        let upper = tighter(comparator, self.upper.clone(), upper, Ordering::Less);
        Self::new(lower, upper)
    }
}

/// Pick whichever limit is further toward `inward`.
fn tighter<V, C: Comparator<V>>(
    comparator: &C,
    current: Bound<V>,
    requested: Bound<V>,
    inward: Ordering,
) -> Bound<V> {
    let (current_value, current_excluded) = match &current {
        Bound::Unbounded => return requested,
        Bound::Included(v) => (v, false),
        Bound::Excluded(v) => (v, true),
    };
    let (requested_value, requested_excluded) = match &requested {
        Bound::Unbounded => return current,
        Bound::Included(v) => (v, false),
        Bound::Excluded(v) => (v, true),
    };
    match comparator.compare(requested_value, current_value) {
        Ordering::Equal if requested_excluded && !current_excluded => requested,
        Ordering::Equal => current,
        ordering if ordering == inward => requested,
        _ => current,
    }
}

fn above_lower<V, C: Comparator<V>>(comparator: &C, value: &V, lower: Bound<&V>) -> bool {
    match lower {
        Bound::Included(limit) => comparator.compare(value, limit).is_ge(),
        Bound::Excluded(limit) => comparator.compare(value, limit).is_gt(),
        Bound::Unbounded => true,
    }
}

fn below_upper<V, C: Comparator<V>>(comparator: &C, value: &V, upper: Bound<&V>) -> bool {
    match upper {
        Bound::Included(limit) => comparator.compare(value, limit).is_le(),
        Bound::Excluded(limit) => comparator.compare(value, limit).is_lt(),
        Bound::Unbounded => true,
    }
}

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl<V, C: Comparator<V>, H> AvlTreeSet<V, C, H> {
    /// A view of the elements below `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = (0..10).collect();
    /// assert_eq!(set.head_set(3).to_vec(), vec![0, 1, 2]);
    /// assert_eq!(set.tail_set(7).to_vec(), vec![7, 8, 9]);
    /// assert_eq!(set.sub_set(4, 6).to_vec(), vec![4, 5]);
    /// ```
    pub fn head_set(&self, to: V) -> RangeView<'_, V, C, H> {
        self.range_set(Bound::Unbounded, Bound::Excluded(to))
    }

    /// A view of the elements from `from` on.
    pub fn tail_set(&self, from: V) -> RangeView<'_, V, C, H> {
        self.range_set(Bound::Included(from), Bound::Unbounded)
    }

    /// A view of the elements from `from` up to, not including, `to`.
    pub fn sub_set(&self, from: V, to: V) -> RangeView<'_, V, C, H> {
        self.range_set(Bound::Included(from), Bound::Excluded(to))
    }

    /// A view with arbitrary bounds. Bounds that cross give an empty view.
    pub fn range_set(&self, lower: Bound<V>, upper: Bound<V>) -> RangeView<'_, V, C, H> {
        RangeView::new(self, Bounds::new(lower, upper))
    }

    /// [`head_set`](Self::head_set) that can also modify the tree.
    pub fn head_set_mut(&mut self, to: V) -> RangeViewMut<'_, V, C, H> {
        self.range_set_mut(Bound::Unbounded, Bound::Excluded(to))
    }

    /// [`tail_set`](Self::tail_set) that can also modify the tree.
    pub fn tail_set_mut(&mut self, from: V) -> RangeViewMut<'_, V, C, H> {
        self.range_set_mut(Bound::Included(from), Bound::Unbounded)
    }

    /// [`sub_set`](Self::sub_set) that can also modify the tree.
    pub fn sub_set_mut(&mut self, from: V, to: V) -> RangeViewMut<'_, V, C, H> {
        self.range_set_mut(Bound::Included(from), Bound::Excluded(to))
    }

    /// [`range_set`](Self::range_set) that can also modify the tree.
    pub fn range_set_mut(&mut self, lower: Bound<V>, upper: Bound<V>) -> RangeViewMut<'_, V, C, H> {
        RangeViewMut::new(self, Bounds::new(lower, upper))
    }

    /// Returns an iterator over the elements in a range, using Rust's range
    /// syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = (0..10).collect();
    /// assert_eq!(set.range(3..6).copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// assert_eq!(set.range(..=2).copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// assert_eq!(set.range(8..).rev().copied().collect::<Vec<_>>(), vec![9, 8]);
    /// ```
    pub fn range<R: RangeBounds<V>>(&self, range: R) -> Iter<'_, V> {
        let lower = range.start_bound();
        let upper = range.end_bound();
        Iter::new(
            &self.arena,
            self.first_within(lower, upper),
            self.last_within(lower, upper),
        )
    }

    // ============================================================================
    // RANGE QUERY HELPERS
    // ============================================================================

    /// Smallest node inside the bounds, or `NULL_NODE`.
    pub(crate) fn first_within(&self, lower: Bound<&V>, upper: Bound<&V>) -> NodeId {
        let node = match lower {
            Bound::Unbounded => minimum(&self.arena, self.root),
            Bound::Included(limit) => self.search_nearest_node(limit, SearchNearest::RoundedUp),
            Bound::Excluded(limit) => {
                let node = self.search_nearest_node(limit, SearchNearest::RoundedUp);
                match self.arena.get(node) {
                    Some(n) if self.comparator.compare(&n.value, limit).is_eq() => {
                        successor(&self.arena, node)
                    }
                    _ => node,
                }
            }
        };
        self.admitted(node, lower, upper)
    }

    /// Largest node inside the bounds, or `NULL_NODE`.
    pub(crate) fn last_within(&self, lower: Bound<&V>, upper: Bound<&V>) -> NodeId {
        let node = match upper {
            Bound::Unbounded => maximum(&self.arena, self.root),
            Bound::Included(limit) => self.search_nearest_node(limit, SearchNearest::RoundedDown),
            Bound::Excluded(limit) => {
                let node = self.search_nearest_node(limit, SearchNearest::RoundedDown);
                match self.arena.get(node) {
                    Some(n) if self.comparator.compare(&n.value, limit).is_eq() => {
                        predecessor(&self.arena, node)
                    }
                    _ => node,
                }
            }
        };
        self.admitted(node, lower, upper)
    }

    fn admitted(&self, node: NodeId, lower: Bound<&V>, upper: Bound<&V>) -> NodeId {
        match self.arena.get(node) {
            Some(n)
                if above_lower(&self.comparator, &n.value, lower)
                    && below_upper(&self.comparator, &n.value, upper) =>
            {
                node
            }
            _ => NULL_NODE,
        }
    }
}

// ============================================================================
// WINDOW
// ============================================================================

/// Bounds plus a size cache tagged with the generation it was taken at.
struct Window<V> {
    bounds: Bounds<V>,
    size: Cell<Option<(usize, u64)>>,
    /// Cursors taken from this window only accept this window back.
    id: u64,
}

impl<V> Window<V> {
    fn new(bounds: Bounds<V>) -> Self {
        Self {
            bounds,
            size: Cell::new(None),
            id: next_source_id(),
        }
    }

    fn first_node<C: Comparator<V>, H>(&self, tree: &AvlTreeSet<V, C, H>) -> NodeId {
        let (lower, upper) = self.bounds.as_refs();
        tree.first_within(lower, upper)
    }

    fn last_node<C: Comparator<V>, H>(&self, tree: &AvlTreeSet<V, C, H>) -> NodeId {
        let (lower, upper) = self.bounds.as_refs();
        tree.last_within(lower, upper)
    }

    fn len<C: Comparator<V>, H>(&self, tree: &AvlTreeSet<V, C, H>) -> usize {
        if let Some((size, generation)) = self.size.get() {
            if generation == tree.generation {
                return size;
            }
        }
        let size = Iter::new(&tree.arena, self.first_node(tree), self.last_node(tree)).count();
        self.size.set(Some((size, tree.generation)));
        size
    }
}

// ============================================================================
// RANGE VIEWS
// ============================================================================

/// Read-only window onto part of an [`AvlTreeSet`].
pub struct RangeView<'a, V, C, H> {
    tree: &'a AvlTreeSet<V, C, H>,
    window: Window<V>,
}

/// Window onto part of an [`AvlTreeSet`] that writes through to the tree.
///
/// ```
/// use avltree::AvlTreeSet;
///
/// let mut set: AvlTreeSet<i32> = [50, 150, 250].into_iter().collect();
/// let mut view = set.sub_set_mut(100, 200);
/// assert!(view.insert(180).unwrap());
/// assert!(view.insert(300).is_err());
/// assert_eq!(view.to_vec(), vec![150, 180]);
/// assert_eq!(set.to_vec(), vec![50, 150, 180, 250]);
/// ```
pub struct RangeViewMut<'a, V, C, H> {
    tree: &'a mut AvlTreeSet<V, C, H>,
    window: Window<V>,
}

impl<'a, V, C: Comparator<V>, H> RangeView<'a, V, C, H> {
    pub(crate) fn new(tree: &'a AvlTreeSet<V, C, H>, bounds: Bounds<V>) -> Self {
        Self {
            tree,
            window: Window::new(bounds),
        }
    }

    range_view_reads!();
}

impl<'a, V, C: Comparator<V>, H> RangeViewMut<'a, V, C, H> {
    pub(crate) fn new(tree: &'a mut AvlTreeSet<V, C, H>, bounds: Bounds<V>) -> Self {
        Self {
            tree,
            window: Window::new(bounds),
        }
    }

    range_view_reads!();

    /// A nested view that can also modify the tree.
    pub fn range_set_mut(&mut self, lower: Bound<V>, upper: Bound<V>) -> RangeViewMut<'_, V, C, H>
    where
        V: Clone,
    {
        let bounds = self
            .window
            .bounds
            .intersect(&self.tree.comparator, lower, upper);
        RangeViewMut::new(&mut *self.tree, bounds)
    }

    /// [`head_set`](Self::head_set) that can also modify the tree.
    pub fn head_set_mut(&mut self, to: V) -> RangeViewMut<'_, V, C, H>
    where
        V: Clone,
    {
        self.range_set_mut(Bound::Unbounded, Bound::Excluded(to))
    }

    /// [`tail_set`](Self::tail_set) that can also modify the tree.
    pub fn tail_set_mut(&mut self, from: V) -> RangeViewMut<'_, V, C, H>
    where
        V: Clone,
    {
        self.range_set_mut(Bound::Included(from), Bound::Unbounded)
    }

    /// [`sub_set`](Self::sub_set) that can also modify the tree.
    pub fn sub_set_mut(&mut self, from: V, to: V) -> RangeViewMut<'_, V, C, H>
    where
        V: Clone,
    {
        self.range_set_mut(Bound::Included(from), Bound::Excluded(to))
    }
}

impl<'a, V, C: Comparator<V>, H: StructureHook<V>> RangeViewMut<'a, V, C, H> {
    /// Add `value` to the backing tree.
    ///
    /// Values outside the bounds are rejected with
    /// [`InvalidArgument`](AvlTreeError::InvalidArgument) and the tree is left
    /// alone.
    pub fn insert(&mut self, value: V) -> AvlResult<bool> {
        if !self.window.bounds.admits(&self.tree.comparator, &value) {
            return Err(AvlTreeError::outside_view("insert"));
        }
        Ok(self.tree.insert(value))
    }

    /// Add every value, returning whether any was new. Stops at the first
    /// value outside the bounds; values before it stay inserted.
    pub fn insert_all<I: IntoIterator<Item = V>>(&mut self, values: I) -> AvlResult<bool> {
        let mut modified = false;
        for value in values {
            modified |= self.insert(value)?;
        }
        Ok(modified)
    }

    /// Remove `value` if it is inside the bounds and present.
    pub fn remove(&mut self, value: &V) -> bool {
        self.take(value).is_some()
    }

    /// Remove and return the stored element equal to `value`, if it is inside
    /// the bounds.
    pub fn take(&mut self, value: &V) -> Option<V> {
        if !self.window.bounds.admits(&self.tree.comparator, value) {
            return None;
        }
        self.tree.take(value)
    }

    /// Remove every listed value that is in this view.
    pub fn remove_all<'v, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove(value);
        }
        changed
    }

    /// Keep only the elements of this view that compare equal to something
    /// in `keep`. Elements outside the bounds are untouched.
    pub fn retain_all(&mut self, keep: &[V]) -> bool {
        let before = self.tree.count;
        let mut cursor = self.cursor();
        while let Ok(value) = cursor.next(&*self) {
            let retained = keep
                .iter()
                .any(|k| self.tree.comparator.compare(k, value).is_eq());
            if !retained && cursor.remove(&mut *self).is_err() {
                break;
            }
        }
        self.tree.count != before
    }

    /// Keep only the elements of this view for which `keep` returns `true`.
    pub fn retain<F: FnMut(&V) -> bool>(&mut self, mut keep: F) {
        let mut cursor = self.cursor();
        while let Ok(value) = cursor.next(&*self) {
            if !keep(value) && cursor.remove(&mut *self).is_err() {
                break;
            }
        }
    }

    /// Remove every element inside the bounds.
    pub fn clear(&mut self) {
        let mut cursor = self.cursor();
        while cursor.next(&*self).is_ok() {
            if cursor.remove(&mut *self).is_err() {
                break;
            }
        }
    }
}

// ============================================================================
// CURSOR SOURCES
// ============================================================================

impl<V, C: Comparator<V>, H: StructureHook<V>> CursorSource for RangeView<'_, V, C, H> {
    type Value = V;
    type Order = C;
    type Hook = H;

    fn backing(&self) -> &AvlTreeSet<V, C, H> {
        self.tree
    }

    fn upper_bound(&self) -> Bound<&V> {
        self.window.bounds.upper.as_ref()
    }

    fn window_id(&self) -> u64 {
        self.window.id
    }
}

impl<V, C: Comparator<V>, H: StructureHook<V>> CursorSource for RangeViewMut<'_, V, C, H> {
    type Value = V;
    type Order = C;
    type Hook = H;

    fn backing(&self) -> &AvlTreeSet<V, C, H> {
        &*self.tree
    }

    fn upper_bound(&self) -> Bound<&V> {
        self.window.bounds.upper.as_ref()
    }

    fn window_id(&self) -> u64 {
        self.window.id
    }
}

impl<V, C: Comparator<V>, H: StructureHook<V>> CursorSourceMut for RangeViewMut<'_, V, C, H> {
    fn backing_mut(&mut self) -> &mut AvlTreeSet<V, C, H> {
        &mut *self.tree
    }
}

impl<V: fmt::Debug, C: Comparator<V>, H> fmt::Debug for RangeView<'_, V, C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V: fmt::Debug, C: Comparator<V>, H> fmt::Debug for RangeViewMut<'_, V, C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, V, C: Comparator<V>, H> IntoIterator for &'a RangeView<'_, V, C, H> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
