//! Generalized suffix tree
//!
//! The tree indexes every suffix of every string added to it. Construction
//! is online: symbols are appended one at a time and the tree is valid for
//! queries after each call.
//!
//! ## Architecture
//!
//! - `arena`: shared text buffer and node storage
//! - `cursor`: active point and remainder
//! - `build`: the per-symbol extension loop
//! - `strings`: string boundaries for the generalized tree
//! - `types`: ids, the symbol bound, configuration and statistics
//!
//! Queries live in [`crate::query`].

pub(crate) mod arena;
mod build;
pub(crate) mod cursor;
mod strings;
pub mod types;

pub use types::{NodeId, OPEN_END, ROOT, Symbol, TreeConfig, TreeStats};

use arena::Arena;
use cursor::Cursor;
use tracing::debug;

/// Online generalized suffix tree over symbols of type `S`.
///
/// Writers need `&mut self`, readers `&self`; the tree is `Sync` whenever
/// `S` is, so any number of queries may run while no append is in flight.
///
/// # Example
/// ```
/// use gstree::SuffixTree;
///
/// let mut tree = SuffixTree::new();
/// tree.add_string(b"abab$".iter().copied()).unwrap();
///
/// assert!(tree.is_substring(b"bab"));
/// assert_eq!(tree.substring_count(b"ab"), 2);
/// assert!(tree.is_suffix(b"b$"));
/// assert!(!tree.is_suffix(b"ab"));
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTree<S> {
    pub(crate) arena: Arena<S>,
    pub(crate) cursor: Cursor,
    /// First node allocated for the current string
    first_string_node: NodeId,
    /// Buffer offset where each string starts; the last entry is the
    /// string under construction
    string_starts: Vec<usize>,
    config: TreeConfig,
}

impl<S: Symbol> SuffixTree<S> {
    /// Create an empty tree with the default configuration
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree with the given configuration
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            arena: Arena::with_capacity(config.text_capacity, config.node_capacity),
            cursor: Cursor::default(),
            first_string_node: 1,
            string_starts: vec![0],
            config,
        }
    }

    /// Discard every string and return to a tree containing only the root
    pub fn clear(&mut self) {
        debug!(
            symbols = self.arena.len(),
            nodes = self.arena.node_count(),
            "clearing suffix tree"
        );
        self.arena.reset();
        self.cursor.reset();
        self.first_string_node = self.arena.node_count();
        self.string_starts.clear();
        self.string_starts.push(0);
    }

    /// Number of symbols across all strings
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Suffixes of the current string that are still implicit (the remainder)
    pub fn pending_suffixes(&self) -> usize {
        self.cursor.remainder
    }

    /// True when every suffix of the current string is explicit, i.e. a new
    /// string can be started
    pub fn is_resolved(&self) -> bool {
        self.cursor.is_resolved()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The shared text buffer
    pub fn text(&self) -> &[S] {
        self.arena.text()
    }

    /// Collect structural statistics (walks the whole arena)
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            symbols: self.arena.len(),
            strings: self.string_count(),
            nodes: self.arena.node_count(),
            pending_suffixes: self.cursor.remainder,
            ..Default::default()
        };

        for node in self.arena.nodes().iter().skip(1) {
            if node.is_leaf() {
                stats.leaves += 1;
                if node.is_open() {
                    stats.open_leaves += 1;
                }
            } else {
                stats.internal_nodes += 1;
            }
        }

        stats
    }
}

impl<S: Symbol> Default for SuffixTree<S> {
    fn default() -> Self {
        Self::new()
    }
}
