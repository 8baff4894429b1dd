//! String boundaries for the generalized tree
//!
//! Several strings share one buffer and one tree. When a string is finished
//! its open leaves are capped at the current buffer length, so suffixes of
//! the next string cannot run on into the previous one's leaves.

use super::SuffixTree;
use super::types::Symbol;
use crate::error::{TreeError, TreeResult};
use tracing::debug;

impl<S: Symbol> SuffixTree<S> {
    /// Close the current string and start a new one.
    ///
    /// Fails with [`TreeError::UnresolvedSuffixes`] if the current string
    /// still has implicit suffixes; the tree is left unchanged in that case.
    /// Terminate each string with a symbol unique to it to avoid this.
    pub fn begin_new_string(&mut self) -> TreeResult<()> {
        if !self.cursor.is_resolved() {
            return Err(TreeError::UnresolvedSuffixes {
                pending: self.cursor.remainder,
            });
        }

        let capped = self.arena.cap_open_ends(self.first_string_node);
        self.cursor.reset();
        self.first_string_node = self.arena.node_count();

        // An empty current string is reused rather than recorded twice
        let len = self.arena.len();
        if self.string_starts.last() != Some(&len) {
            self.string_starts.push(len);
        }

        debug!(
            string = self.string_starts.len() - 1,
            start = len,
            capped,
            "began new string"
        );
        Ok(())
    }

    /// Start a new string and append every symbol of `sequence` to it
    pub fn add_string<I>(&mut self, sequence: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = S>,
    {
        self.begin_new_string()?;
        self.extend(sequence);
        Ok(())
    }

    /// Number of non-empty strings added so far, the current one included
    pub fn string_count(&self) -> usize {
        let current_is_empty = self.string_starts.last() == Some(&self.arena.len());
        self.string_starts.len() - usize::from(current_is_empty)
    }

    /// The symbols of each string, in the order they were added
    pub fn strings(&self) -> impl Iterator<Item = &[S]> + '_ {
        let text = self.arena.text();
        let starts = &self.string_starts;
        (0..self.string_count()).map(move |i| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[starts[i]..end]
        })
    }

    /// Map a buffer offset to `(string index, offset within that string)`
    pub(crate) fn locate_offset(&self, pos: usize) -> (usize, usize) {
        let string = self.string_starts.partition_point(|&start| start <= pos) - 1;
        (string, pos - self.string_starts[string])
    }
}
