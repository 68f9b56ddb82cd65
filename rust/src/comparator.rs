//! Total orders used to arrange set elements.
//!
//! Two elements that compare `Equal` are the same element as far as the set is
//! concerned, whatever `PartialEq` says.

use std::cmp::Ordering;
use std::fmt;

/// A total order over `V`.
pub trait Comparator<V: ?Sized> {
    /// Compare two elements.
    fn compare(&self, a: &V, b: &V) -> Ordering;

    /// How far apart two elements are, if this order has a notion of distance.
    ///
    /// Only [`SearchNearest::Absolute`](crate::SearchNearest::Absolute) uses
    /// it, and only makes sense when the value grows with the true gap between
    /// the elements, as it does for numbers. Orders that return `None` make
    /// `Absolute` fall back to the lower neighbour.
    fn distance(&self, _a: &V, _b: &V) -> Option<u128> {
        None
    }
}

impl<V: ?Sized, C: Comparator<V> + ?Sized> Comparator<V> for &C {
    fn compare(&self, a: &V, b: &V) -> Ordering {
        (**self).compare(a, b)
    }

    fn distance(&self, a: &V, b: &V) -> Option<u128> {
        (**self).distance(a, b)
    }
}

/// The element type's own [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<V: Ord + ?Sized> Comparator<V> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}

/// Natural order for primitive integers, with the absolute difference as
/// distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericOrder;

macro_rules! numeric_order {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparator<$t> for NumericOrder {
                #[inline]
                fn compare(&self, a: &$t, b: &$t) -> Ordering {
                    a.cmp(b)
                }

                #[inline]
                fn distance(&self, a: &$t, b: &$t) -> Option<u128> {
                    Some(a.abs_diff(*b) as u128)
                }
            }
        )*
    };
}

numeric_order!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// An order given by a closure.
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder")
    }
}

impl<V: ?Sized, F> Comparator<V> for FnOrder<F>
where
    F: Fn(&V, &V) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Ordering {
        (self.0)(a, b)
    }
}

/// Wrap a closure as a [`Comparator`].
pub fn from_fn<V: ?Sized, F>(f: F) -> FnOrder<F>
where
    F: Fn(&V, &V) -> Ordering,
{
    FnOrder(f)
}
