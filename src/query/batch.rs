//! Batched queries
//!
//! Queries only read the tree, so a batch of patterns can be answered on
//! rayon's pool. Small batches stay on the calling thread.

use crate::tree::{SuffixTree, Symbol};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Answers to the three basic queries for one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub is_substring: bool,
    pub is_suffix: bool,
    /// Number of occurrences (leaves below the match)
    pub count: usize,
}

impl<S: Symbol> SuffixTree<S> {
    /// Answer `is_substring`, `is_suffix` and `substring_count` for one
    /// pattern
    pub fn report(&self, pattern: &[S]) -> QueryReport {
        if !self.is_substring(pattern) {
            return QueryReport {
                is_substring: false,
                is_suffix: pattern.is_empty(),
                count: 0,
            };
        }

        QueryReport {
            is_substring: true,
            is_suffix: self.is_suffix(pattern),
            count: self.substring_count(pattern),
        }
    }

    /// Report on every pattern, in input order
    pub fn query_batch<P>(&self, patterns: &[P]) -> Vec<QueryReport>
    where
        P: AsRef<[S]> + Sync,
        S: Sync,
    {
        let threshold = self.config().parallel_query_threshold;
        if patterns.len() >= threshold.max(1) {
            debug!(patterns = patterns.len(), "running query batch in parallel");
            patterns
                .par_iter()
                .map(|pattern| self.report(pattern.as_ref()))
                .collect()
        } else {
            patterns
                .iter()
                .map(|pattern| self.report(pattern.as_ref()))
                .collect()
        }
    }
}
