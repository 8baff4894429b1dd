//! Turning input files into symbol sequences
//!
//! The tree does not know about bytes or terminators; this module decides
//! both. Every record becomes its bytes followed by a terminator carrying
//! the record's index, which no other record can contain.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Alphabet used by the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSymbol {
    Byte(u8),
    /// End of record `n`
    Terminator(u32),
}

/// One string to index: a whole file or one of its lines
#[derive(Debug, Clone)]
pub struct Record {
    /// `path` for whole files, `path:line` for lines (1-based)
    pub label: String,
    pub bytes: Vec<u8>,
}

impl Record {
    /// Symbols for this record, terminated by `Terminator(index)`
    pub fn symbols(&self, index: u32) -> impl Iterator<Item = TextSymbol> + '_ {
        self.bytes
            .iter()
            .map(|&b| TextSymbol::Byte(b))
            .chain(std::iter::once(TextSymbol::Terminator(index)))
    }
}

/// Encode a query pattern (bytes only, never a terminator)
pub fn encode_pattern(pattern: &str) -> Vec<TextSymbol> {
    pattern.bytes().map(TextSymbol::Byte).collect()
}

/// Read every input into records.
///
/// With `lines` each non-empty line is its own record (a trailing `\r` is
/// dropped); otherwise each file is one record.
pub fn load_records(paths: &[PathBuf], lines: bool) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for path in paths {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;

        if lines {
            records.extend(split_lines(path, &data));
        } else {
            records.push(Record {
                label: path.display().to_string(),
                bytes: data,
            });
        }
    }

    if u32::try_from(records.len()).is_err() {
        anyhow::bail!("Too many records to index: {}", records.len());
    }

    Ok(records)
}

/// Split file content into line records using memchr
fn split_lines(path: &Path, data: &[u8]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut start = 0;
    let ends = memchr::memchr_iter(b'\n', data).chain(std::iter::once(data.len()));

    for (line_idx, end) in ends.enumerate() {
        let mut line = &data[start..end];
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }
        if !line.is_empty() {
            records.push(Record {
                label: format!("{}:{}", path.display(), line_idx + 1),
                bytes: line.to_vec(),
            });
        }
        start = end + 1;
    }

    records
}
