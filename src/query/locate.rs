//! Pattern lookup and the queries derived from it
//!
//! Every query first walks the pattern down from the root. Edge labels are
//! read straight out of the shared buffer, with open ends clamped to its
//! current length, so a tree that is still being built can be queried.

use crate::tree::{NodeId, ROOT, SuffixTree, Symbol};
use serde::Serialize;

/// Where a pattern ends inside the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<S> {
    /// The pattern ends exactly at this node
    Node(NodeId),
    /// The pattern ends inside the edge from `parent` to `child`
    Edge {
        parent: NodeId,
        /// First symbol of the edge (its key in `parent`'s children)
        first: S,
        child: NodeId,
        /// Symbols of the edge matched by the pattern (at least 1, less
        /// than the edge length)
        consumed: usize,
    },
}

/// One occurrence of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Occurrence {
    /// Index of the string, in the order strings were added
    pub string: usize,
    /// Offset of the match inside that string
    pub offset: usize,
}

impl<S: Symbol> SuffixTree<S> {
    /// Walk `pattern` down from the root.
    ///
    /// Returns `None` if the pattern does not occur. The empty pattern is
    /// found at the root.
    pub fn locate(&self, pattern: &[S]) -> Option<Location<S>> {
        let mut node = ROOT;
        let mut rest = pattern;

        while let Some(&first) = rest.first() {
            let child = self.arena.child(node, &first)?;
            let label = self.arena.edge_label(child);

            let compared = label.len().min(rest.len());
            if label[..compared] != rest[..compared] {
                return None;
            }

            if rest.len() < label.len() {
                return Some(Location::Edge {
                    parent: node,
                    first,
                    child,
                    consumed: rest.len(),
                });
            }

            rest = &rest[label.len()..];
            node = child;
        }

        Some(Location::Node(node))
    }

    /// True if `pattern` occurs anywhere in any string.
    /// The empty pattern is always a substring.
    pub fn is_substring(&self, pattern: &[S]) -> bool {
        self.locate(pattern).is_some()
    }

    /// True if `pattern` ends at a leaf, i.e. nothing can follow it.
    ///
    /// For strings terminated by a unique symbol this is exactly "is a
    /// suffix of some string". The empty pattern is always a suffix.
    pub fn is_suffix(&self, pattern: &[S]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        matches!(
            self.locate(pattern),
            Some(Location::Node(id)) if self.arena.node(id).is_leaf()
        )
    }

    /// Number of leaves below the point where `pattern` ends.
    ///
    /// With uniquely terminated strings each leaf is one occurrence, so this
    /// is the number of places `pattern` starts across all strings.
    pub fn substring_count(&self, pattern: &[S]) -> usize {
        let Some(location) = self.locate(pattern) else {
            return 0;
        };

        let mut count = 0;
        let mut stack = vec![subtree_root(location)];
        while let Some(id) = stack.pop() {
            let node = self.arena.node(id);
            if node.is_leaf() {
                if id != ROOT {
                    count += 1;
                }
                continue;
            }
            stack.extend(node.children.values().copied());
        }
        count
    }

    /// Every place `pattern` starts, as `(string, offset)` pairs sorted in
    /// string order. Covers the same leaves `substring_count` counts.
    pub fn occurrences(&self, pattern: &[S]) -> Vec<Occurrence> {
        let Some(location) = self.locate(pattern) else {
            return Vec::new();
        };

        // Depth = length of the path label from the root
        let start = match location {
            Location::Node(id) => (id, pattern.len()),
            Location::Edge {
                child, consumed, ..
            } => (child, pattern.len() - consumed + self.arena.edge_len(child)),
        };

        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some((id, depth)) = stack.pop() {
            let node = self.arena.node(id);
            if node.is_leaf() {
                if id != ROOT {
                    let (string, offset) = self.locate_offset(self.arena.edge_end(id) - depth);
                    found.push(Occurrence { string, offset });
                }
                continue;
            }
            for &child in node.children.values() {
                stack.push((child, depth + self.arena.edge_len(child)));
            }
        }

        found.sort_unstable();
        found
    }
}

/// Node whose leaves are the occurrences of a located pattern
#[inline]
fn subtree_root<S>(location: Location<S>) -> NodeId {
    match location {
        Location::Node(id) => id,
        Location::Edge { child, .. } => child,
    }
}
