//! # gstree - Online Generalized Suffix Tree
//!
//! An in-memory exact-match index built one symbol at a time with
//! Ukkonen's algorithm. Several strings can share one tree; every suffix of
//! every string is indexed, and substring, suffix and occurrence queries run
//! in time proportional to the pattern (plus the number of matches for
//! counting).
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Text buffer, node arena and online construction
//! - [`query`] - Pattern lookup and the queries derived from it
//! - [`error`] - Errors reported while building
//!
//! ## Quick Start
//!
//! ```
//! use gstree::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! // Terminate each string with a symbol unique to it
//! tree.add_string("banana$".chars()).unwrap();
//! tree.add_string("bandana#".chars()).unwrap();
//!
//! let pattern: Vec<char> = "ana".chars().collect();
//! assert!(tree.is_substring(&pattern));
//! assert_eq!(tree.substring_count(&pattern), 3);
//! ```
//!
//! ## Symbols
//!
//! The alphabet is any `Copy + Eq + Hash` type. The tree never adds
//! terminators itself: a string whose last symbol also occurs earlier in it
//! leaves suffixes implicit, and [`SuffixTree::begin_new_string`] refuses to
//! start the next string until they are resolved.
//!
//! ## Concurrency
//!
//! Appends take `&mut self` and queries take `&self`, so one writer or many
//! readers. [`SuffixTree::query_batch`] fans large batches out over rayon.

pub mod error;
pub mod query;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use query::{Location, Occurrence, QueryReport};
pub use tree::{NodeId, ROOT, SuffixTree, Symbol, TreeConfig, TreeStats};
