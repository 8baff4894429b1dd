//! Command-line front end: reads records, builds one tree over all of
//! them and answers pattern queries

pub mod input;
pub mod output;
pub mod progress;

use anyhow::{Context, Result};
use gstree::{Occurrence, SuffixTree, TreeConfig, TreeStats};
use input::{Record, TextSymbol, encode_pattern};
use progress::BuildProgress;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// A match position, resolved to the record it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub source: String,
    pub offset: usize,
}

/// Everything reported for one query pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternResult {
    pub pattern: String,
    pub found: bool,
    pub count: usize,
    /// Records that end with the pattern
    pub suffix_of: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<Match>>,
}

/// Suffix tree over a set of records
pub struct RecordIndex {
    tree: SuffixTree<TextSymbol>,
    records: Vec<Record>,
}

impl RecordIndex {
    /// Add every record as its own terminated string
    pub fn build(records: Vec<Record>, config: TreeConfig, show_progress: bool) -> Result<Self> {
        let total_symbols: usize = records.iter().map(|r| r.bytes.len() + 1).sum();
        let progress = BuildProgress::new(total_symbols as u64, show_progress);
        let started = Instant::now();

        let mut tree = SuffixTree::with_config(config);
        for (index, record) in records.iter().enumerate() {
            let index = u32::try_from(index).context("Too many records to index")?;
            tree.add_string(record.symbols(index))
                .with_context(|| format!("Failed to index {}", record.label))?;
            progress.record_done(record.bytes.len() as u64 + 1);
        }
        progress.finish(tree.string_count());

        info!(
            strings = tree.string_count(),
            symbols = tree.len(),
            nodes = tree.node_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built suffix tree"
        );

        Ok(Self { tree, records })
    }

    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// Answer each pattern, in order
    pub fn query(&self, patterns: &[String], with_occurrences: bool) -> Vec<PatternResult> {
        let encoded: Vec<Vec<TextSymbol>> = patterns.iter().map(|p| encode_pattern(p)).collect();
        let reports = self.tree.query_batch(&encoded);

        patterns
            .iter()
            .zip(&encoded)
            .zip(reports)
            .map(|((pattern, symbols), report)| {
                let occurrences = if report.count > 0 {
                    self.tree.occurrences(symbols)
                } else {
                    Vec::new()
                };

                PatternResult {
                    pattern: pattern.clone(),
                    found: report.is_substring,
                    count: report.count,
                    suffix_of: self.suffix_of(symbols, &occurrences),
                    occurrences: with_occurrences.then(|| {
                        occurrences
                            .iter()
                            .map(|o| Match {
                                source: self.records[o.string].label.clone(),
                                offset: o.offset,
                            })
                            .collect()
                    }),
                }
            })
            .collect()
    }

    /// Records among the occurrences whose own terminator follows the
    /// pattern, i.e. the pattern is a suffix of that record
    fn suffix_of(&self, symbols: &[TextSymbol], occurrences: &[Occurrence]) -> Vec<String> {
        let mut candidates: Vec<usize> = occurrences.iter().map(|o| o.string).collect();
        candidates.dedup();

        let mut probe = symbols.to_vec();
        probe.push(TextSymbol::Terminator(0));

        candidates
            .into_iter()
            .filter_map(|string| {
                *probe.last_mut()? = TextSymbol::Terminator(string as u32);
                self.tree
                    .is_suffix(&probe)
                    .then(|| self.records[string].label.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, text: &str) -> Record {
        Record {
            label: label.to_string(),
            bytes: text.as_bytes().to_vec(),
        }
    }

    fn index() -> RecordIndex {
        RecordIndex::build(
            vec![record("a", "banana"), record("b", "bandana"), record("c", "cab")],
            TreeConfig::default(),
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_query_counts_across_records() {
        let results = index().query(&["ana".to_string(), "ab".to_string()], true);

        assert_eq!(results[0].count, 3);
        assert_eq!(results[0].suffix_of, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            results[0].occurrences.as_deref(),
            Some(
                &[
                    Match { source: "a".into(), offset: 1 },
                    Match { source: "a".into(), offset: 3 },
                    Match { source: "b".into(), offset: 4 },
                ][..]
            )
        );

        assert_eq!(results[1].count, 1);
        assert_eq!(results[1].suffix_of, vec!["c".to_string()]);
    }

    #[test]
    fn test_query_missing_pattern() {
        let results = index().query(&["nab".to_string()], false);
        assert!(!results[0].found);
        assert_eq!(results[0].count, 0);
        assert!(results[0].suffix_of.is_empty());
        assert!(results[0].occurrences.is_none());
    }

    #[test]
    fn test_patterns_do_not_cross_records() {
        // "banana" + "bandana" would contain "aban" if records were joined
        let results = index().query(&["aban".to_string()], false);
        assert!(!results[0].found);
    }

    #[test]
    fn test_stats_counts_records() {
        let stats = index().stats();
        assert_eq!(stats.strings, 3);
        assert_eq!(stats.symbols, 6 + 1 + 7 + 1 + 3 + 1);
        assert_eq!(stats.pending_suffixes, 0);
    }
}
