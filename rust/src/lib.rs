//! AVL tree ordered set in Rust.
//!
//! [`AvlTreeSet`] keeps unique elements sorted under a caller-chosen
//! [`Comparator`], supports live bounded range views, nearest-element search,
//! and cursors that detect changes made behind their back. Layers that keep
//! per-node summaries (interval maxima, subtree sizes) can ride along through
//! a [`StructureHook`].
//!
//! ```
//! use avltree::{AvlTreeSet, SearchNearest};
//!
//! let mut set: AvlTreeSet<i32> = [50, 150, 250].into_iter().collect();
//! assert_eq!(set.search_nearest(&100, SearchNearest::RoundedUp), Some(&150));
//!
//! let mut middle = set.sub_set_mut(100, 200);
//! assert_eq!(middle.len(), 1);
//! middle.insert(180).unwrap();
//! assert!(set.contains(&180));
//! ```

#[macro_use]
mod macros;

mod arena;
pub mod comparator;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod hook;
mod insert_operations;
mod iteration;
mod navigation;
mod range_queries;
mod rotation;
mod search_operations;
mod tree_structure;
mod types;
mod validation;

pub use arena::{Arena, ArenaStats, NodeId, NULL_NODE};
pub use comparator::{Comparator, FnOrder, NaturalOrder, NumericOrder};
pub use error::{AvlResult, AvlResultExt, AvlTreeError};
pub use hook::{NodeRef, StructureHook};
pub use iteration::{Cursor, CursorSource, CursorSourceMut, Iter};
pub use range_queries::{Bounds, RangeView, RangeViewMut};
pub use types::{AvlTreeSet, Node, SearchNearest};
