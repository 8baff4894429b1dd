//! Read-only queries over a [`SuffixTree`](crate::SuffixTree)
//!
//! - `locate`: where a pattern ends in the tree, plus the substring,
//!   suffix, count and occurrence queries built on it
//! - `batch`: many patterns at once, in parallel for large batches

pub mod batch;
pub mod locate;

pub use batch::QueryReport;
pub use locate::{Location, Occurrence};
