//! Output formatting for query results and tree statistics

use super::PatternResult;
use anyhow::Result;
use gstree::TreeStats;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print one block per pattern:
///
/// ```text
/// ana: 3 matches, suffix of 2 records
///   a.txt:1
///   ...
/// ```
pub fn print_results(results: &[PatternResult], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    for result in results {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(stdout, "{}", result.pattern)?;
        stdout.reset()?;
        write!(stdout, ": ")?;

        if !result.found {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(stdout, "not found")?;
            stdout.reset()?;
            continue;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", result.count)?;
        stdout.reset()?;
        write!(stdout, " {}", if result.count == 1 { "match" } else { "matches" })?;

        if !result.suffix_of.is_empty() {
            write!(stdout, ", suffix of {}", result.suffix_of.len())?;
            write!(
                stdout,
                " {}",
                if result.suffix_of.len() == 1 { "record" } else { "records" }
            )?;
        }
        writeln!(stdout)?;

        if let Some(occurrences) = &result.occurrences {
            for m in occurrences {
                write!(stdout, "  ")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(stdout, "{}", m.source)?;
                stdout.reset()?;
                write!(stdout, ":")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(stdout, "{}", m.offset)?;
                stdout.reset()?;
            }
        }
    }

    Ok(())
}

/// Print tree statistics as an aligned table
pub fn print_stats(stats: &TreeStats, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "Suffix Tree Statistics")?;
    stdout.reset()?;
    writeln!(stdout, "======================")?;
    writeln!(stdout)?;

    let rows = [
        ("Strings", stats.strings),
        ("Symbols", stats.symbols),
        ("Nodes", stats.nodes),
        ("Leaves", stats.leaves),
        ("Internal nodes", stats.internal_nodes),
        ("Open leaves", stats.open_leaves),
        ("Pending suffixes", stats.pending_suffixes),
    ];
    for (name, value) in rows {
        writeln!(stdout, "{:18}{}", format!("{}:", name), value)?;
    }

    if stats.symbols > 0 {
        writeln!(stdout)?;
        writeln!(
            stdout,
            "Nodes per symbol: {:.2}",
            stats.nodes as f64 / stats.symbols as f64
        )?;
    }

    Ok(())
}
