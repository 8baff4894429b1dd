//! Construction state: the active point plus the remainder

use super::types::{NodeId, ROOT};

/// Where the next extension starts, and how many suffixes are still owed.
///
/// `edge` is the buffer offset whose symbol selects the outgoing edge of
/// `node`; `length` symbols of that edge are already matched. `remainder`
/// survives across `append` calls when a round ends on a show stopper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub node: NodeId,
    pub edge: usize,
    pub length: usize,
    pub remainder: usize,
}

impl Cursor {
    /// Back to (root, -, 0) with nothing pending
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.remainder == 0
    }

    /// Move down one edge of `edge_len` symbols to `child`
    #[inline]
    pub fn hop(&mut self, child: NodeId, edge_len: usize) {
        self.edge += edge_len;
        self.length -= edge_len;
        self.node = child;
    }

    #[inline]
    pub fn at_root(&self) -> bool {
        self.node == ROOT
    }
}
