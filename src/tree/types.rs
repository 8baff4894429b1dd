//! Types for the suffix tree
//!
//! Node identifiers, the symbol bound, configuration and statistics.

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Index of a node in the arena
pub type NodeId = usize;

/// The root node always lives in the first arena slot
pub const ROOT: NodeId = 0;

/// Reserved `end` value for leaves that still grow with the text buffer
pub const OPEN_END: usize = usize::MAX;

/// Alphabet element stored in the tree.
///
/// Symbols are compared for equality and used as child-map keys, so any
/// small `Copy + Eq + Hash` type works: `u8` for byte strings, `char` for
/// text, or an enum that adds per-string terminators to a base alphabet.
pub trait Symbol: Copy + Eq + Hash {}

impl<T: Copy + Eq + Hash> Symbol for T {}

/// Configuration for suffix tree construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Symbols to reserve in the text buffer up front (default: 0)
    pub text_capacity: usize,
    /// Nodes to reserve in the arena up front (default: 0)
    /// A tree over n symbols holds at most 2n nodes
    pub node_capacity: usize,
    /// Batches with at least this many patterns are queried in parallel
    /// (default: 64)
    pub parallel_query_threshold: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            text_capacity: 0,
            node_capacity: 0,
            parallel_query_threshold: 64,
        }
    }
}

impl TreeConfig {
    /// Configuration pre-sized for roughly `symbols` symbols of input
    pub fn for_text_len(symbols: usize) -> Self {
        Self {
            text_capacity: symbols,
            node_capacity: symbols.saturating_mul(2).saturating_add(1),
            ..Default::default()
        }
    }
}

/// Structural statistics about a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Symbols in the shared text buffer
    pub symbols: usize,
    /// Non-empty strings added so far
    pub strings: usize,
    /// Total nodes, root included
    pub nodes: usize,
    /// Nodes without children (root excluded)
    pub leaves: usize,
    /// Nodes with children (root excluded)
    pub internal_nodes: usize,
    /// Leaves whose end still follows the text buffer
    pub open_leaves: usize,
    /// Suffixes of the current string not yet inserted explicitly
    pub pending_suffixes: usize,
}
