//! Online construction (Ukkonen's algorithm)
//!
//! Each call consumes exactly one symbol. Suffixes that are already present
//! implicitly are not inserted right away: the round stops at the first
//! show stopper and the remainder carries them into the next call.
//!
//! Amortized O(1) per symbol: the active length only shrinks on suffix-link
//! hops and grows by at most one per call.

use super::SuffixTree;
use super::arena::Arena;
use super::cursor::Cursor;
use super::types::{NodeId, OPEN_END, ROOT, Symbol};
use tracing::trace;

impl<S: Symbol> SuffixTree<S> {
    /// Extend the current string by one symbol
    pub fn append(&mut self, symbol: S) {
        extend_one(&mut self.arena, &mut self.cursor, symbol);
    }
}

impl<S: Symbol> Extend<S> for SuffixTree<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.arena.reserve(lower);
        for symbol in iter {
            self.append(symbol);
        }
    }
}

/// Run one extension round for `symbol`
pub(crate) fn extend_one<S: Symbol>(arena: &mut Arena<S>, cursor: &mut Cursor, symbol: S) {
    if cursor.length == 0 {
        cursor.edge = arena.len();
    }
    arena.push_symbol(symbol);
    cursor.remainder += 1;

    // Internal node created earlier in this round still waiting for its link
    let mut pending: Option<NodeId> = None;

    while cursor.remainder > 0 {
        let edge_symbol = arena.symbol_at(cursor.edge);

        match arena.child(cursor.node, &edge_symbol) {
            None => {
                let leaf = arena.alloc(arena.len() - 1, OPEN_END);
                arena.set_child(cursor.node, edge_symbol, leaf);
                link_pending(arena, &mut pending, cursor.node);
            }
            Some(child) => {
                let edge_len = arena.edge_len(child);
                if cursor.length >= edge_len {
                    cursor.hop(child, edge_len);
                    continue;
                }

                let begin = arena.node(child).begin;
                if arena.symbol_at(begin + cursor.length) == symbol {
                    // Already present implicitly; finish next round
                    cursor.length += 1;
                    link_pending(arena, &mut pending, cursor.node);
                    return;
                }

                let split_at = begin + cursor.length;
                let head = arena.alloc(begin, split_at);
                arena.set_child(cursor.node, edge_symbol, head);

                let leaf = arena.alloc(arena.len() - 1, OPEN_END);
                arena.set_child(head, symbol, leaf);

                arena.node_mut(child).begin = split_at;
                let child_first = arena.symbol_at(split_at);
                arena.set_child(head, child_first, child);

                trace!(node = head, begin, split_at, "split edge");
                link_pending(arena, &mut pending, head);
            }
        }

        cursor.remainder -= 1;
        if cursor.at_root() && cursor.length > 0 {
            cursor.length -= 1;
            cursor.edge = arena.len() - cursor.remainder;
        } else {
            cursor.node = arena.node(cursor.node).suffix_link;
        }
    }
}

/// Point the pending node's suffix link at `target`, then make `target`
/// the pending node. The root keeps its self link and is never pending.
#[inline]
fn link_pending<S: Symbol>(arena: &mut Arena<S>, pending: &mut Option<NodeId>, target: NodeId) {
    if let Some(node) = pending.take() {
        arena.node_mut(node).suffix_link = target;
    }
    if target != ROOT {
        *pending = Some(target);
    }
}
