//! Macros shared across modules.

/// Read-only operations common to `RangeView` and `RangeViewMut`.
///
/// Expands inside an `impl` block whose `Self` has a `tree` field referencing
/// the backing `AvlTreeSet<V, C, H>` (shared or exclusive) and a `window`
/// field, with `C: Comparator<V>` in scope.
macro_rules! range_view_reads {
    () => {
        /// The bounds of this view.
        pub fn bounds(&self) -> &$crate::range_queries::Bounds<V> {
            &self.window.bounds
        }

        /// Number of elements inside the bounds.
        ///
        /// Counting walks the window; the count is cached until the backing
        /// tree changes.
        pub fn len(&self) -> usize {
            self.window.len(&*self.tree)
        }

        /// Returns true if no element falls inside the bounds.
        pub fn is_empty(&self) -> bool {
            self.window.first_node(&*self.tree) == $crate::arena::NULL_NODE
        }

        /// Check whether `value` is inside the bounds and stored in the tree.
        pub fn contains(&self, value: &V) -> bool {
            self.window.bounds.admits(&self.tree.comparator, value) && self.tree.contains(value)
        }

        /// Check whether every listed value is in this view.
        pub fn contains_all<'v, I>(&self, values: I) -> bool
        where
            I: IntoIterator<Item = &'v V>,
            V: 'v,
        {
            values.into_iter().all(|value| self.contains(value))
        }

        /// The smallest element inside the bounds.
        pub fn first(&self) -> Option<&V> {
            let node = self.window.first_node(&*self.tree);
            self.tree.arena.get(node).map(|n| &n.value)
        }

        /// The largest element inside the bounds.
        pub fn last(&self) -> Option<&V> {
            let node = self.window.last_node(&*self.tree);
            self.tree.arena.get(node).map(|n| &n.value)
        }

        /// Ascending iterator over the elements inside the bounds.
        pub fn iter(&self) -> $crate::iteration::Iter<'_, V> {
            $crate::iteration::Iter::new(
                &self.tree.arena,
                self.window.first_node(&*self.tree),
                self.window.last_node(&*self.tree),
            )
        }

        /// Copy the elements inside the bounds into a new vector.
        pub fn to_vec(&self) -> Vec<V>
        where
            V: Clone,
        {
            self.iter().cloned().collect()
        }

        /// A cursor over this view, positioned before its first element.
        pub fn cursor(&self) -> $crate::iteration::Cursor {
            $crate::iteration::Cursor::new(
                self.window.first_node(&*self.tree),
                self.tree.generation,
                self.tree.id,
                self.window.id,
            )
        }

        /// The elements of this view below `to`.
        pub fn head_set(&self, to: V) -> $crate::range_queries::RangeView<'_, V, C, H>
        where
            V: Clone,
        {
            self.range_set(std::ops::Bound::Unbounded, std::ops::Bound::Excluded(to))
        }

        /// The elements of this view from `from` on.
        pub fn tail_set(&self, from: V) -> $crate::range_queries::RangeView<'_, V, C, H>
        where
            V: Clone,
        {
            self.range_set(std::ops::Bound::Included(from), std::ops::Bound::Unbounded)
        }

        /// The elements of this view from `from` up to, not including, `to`.
        pub fn sub_set(&self, from: V, to: V) -> $crate::range_queries::RangeView<'_, V, C, H>
        where
            V: Clone,
        {
            self.range_set(
                std::ops::Bound::Included(from),
                std::ops::Bound::Excluded(to),
            )
        }

        /// A nested view. Its bounds are the intersection of these bounds with
        /// the requested ones.
        pub fn range_set(
            &self,
            lower: std::ops::Bound<V>,
            upper: std::ops::Bound<V>,
        ) -> $crate::range_queries::RangeView<'_, V, C, H>
        where
            V: Clone,
        {
            let bounds = self
                .window
                .bounds
                .intersect(&self.tree.comparator, lower, upper);
            $crate::range_queries::RangeView::new(&*self.tree, bounds)
        }
    };
}
