//! Text buffer and node arena
//!
//! All strings share one append-only symbol buffer. Nodes live in a single
//! growable `Vec` and refer to each other by index; nothing is ever removed,
//! so an id stays valid for the lifetime of the tree (until `reset`).

use super::types::{NodeId, OPEN_END, ROOT, Symbol};
use rustc_hash::FxHashMap;

/// A node of the tree. Its incoming edge label is `text[begin..end]`.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    /// First buffer offset of the incoming edge (inclusive)
    pub begin: usize,
    /// Last buffer offset of the incoming edge (exclusive), or `OPEN_END`
    pub end: usize,
    /// Children keyed by the first symbol of their edge
    pub children: FxHashMap<S, NodeId>,
    pub suffix_link: NodeId,
}

impl<S> Node<S> {
    fn new(begin: usize, end: usize) -> Self {
        Self {
            begin,
            end,
            children: FxHashMap::default(),
            suffix_link: ROOT,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.end == OPEN_END
    }
}

/// Shared text buffer plus node storage
#[derive(Debug, Clone)]
pub(crate) struct Arena<S> {
    text: Vec<S>,
    nodes: Vec<Node<S>>,
}

impl<S: Symbol> Arena<S> {
    /// Create an arena holding only the root
    pub fn with_capacity(text_capacity: usize, node_capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(node_capacity.max(1));
        nodes.push(Node::new(0, 0));
        Self {
            text: Vec::with_capacity(text_capacity),
            nodes,
        }
    }

    /// Drop all symbols and nodes except a fresh root.
    /// Allocated capacity is kept.
    pub fn reset(&mut self) {
        self.text.clear();
        self.nodes.clear();
        self.nodes.push(Node::new(0, 0));
    }

    #[inline]
    pub fn text(&self) -> &[S] {
        &self.text
    }

    /// Number of symbols in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn symbol_at(&self, pos: usize) -> S {
        self.text[pos]
    }

    #[inline]
    pub fn push_symbol(&mut self, symbol: S) {
        self.text.push(symbol);
    }

    /// Reserve room for `additional` more symbols
    pub fn reserve(&mut self, additional: usize) {
        self.text.reserve(additional);
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<S> {
        &mut self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Allocate a node for `text[begin..end]` and return its id
    #[inline]
    pub fn alloc(&mut self, begin: usize, end: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(begin, end));
        id
    }

    #[inline]
    pub fn child(&self, id: NodeId, first: &S) -> Option<NodeId> {
        self.nodes[id].children.get(first).copied()
    }

    #[inline]
    pub fn set_child(&mut self, id: NodeId, first: S, child: NodeId) {
        self.nodes[id].children.insert(first, child);
    }

    /// End offset of a node's edge, with open ends clamped to the buffer
    #[inline]
    pub fn edge_end(&self, id: NodeId) -> usize {
        self.nodes[id].end.min(self.text.len())
    }

    #[inline]
    pub fn edge_len(&self, id: NodeId) -> usize {
        self.edge_end(id) - self.nodes[id].begin
    }

    /// Symbols on the edge leading into `id`
    #[inline]
    pub fn edge_label(&self, id: NodeId) -> &[S] {
        &self.text[self.nodes[id].begin..self.edge_end(id)]
    }

    /// Fix the end of every open node allocated at or after `first` to the
    /// current buffer length. Returns how many nodes were capped.
    pub fn cap_open_ends(&mut self, first: NodeId) -> usize {
        let len = self.text.len();
        let mut capped = 0;
        for node in self.nodes.iter_mut().skip(first) {
            if node.end > len {
                node.end = len;
                capped += 1;
            }
        }
        capped
    }
}
