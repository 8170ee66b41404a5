//! An in-memory record store built on an unbalanced binary search tree, plus two in-place
//! sorts over record sequences.
//!
//! - [`BinarySearchTree`]: insert, exact-key lookup, removal and in/pre/post-order traversal.
//!   Shape depends only on insertion order; nothing is rebalanced.
//! - [`quick_sort`] and [`selection_sort`]: order a slice of records by title.
//!
//! Both work over [`Record`], or any type implementing [`Keyed`] (tree) or [`Titled`] (sorts).

pub mod error;
pub mod iter;
mod node;
pub mod record;
pub mod sort;
pub mod stats;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use iter::{Traversal, TraversalOrder};
pub use record::{Keyed, Record, Titled};
pub use sort::{
    quick_sort, quick_sort_by, quick_sort_range, selection_sort, selection_sort_by,
};
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::BinarySearchTree;
