mod cli;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cli::RecordIndex;
use cli::input::load_records;
use gstree::TreeConfig;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gstree")]
#[command(about = "Index files with a generalized suffix tree and query them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with tree configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Do not show a progress bar while building
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Files to index
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Index every line as its own string instead of whole files
    #[arg(short, long)]
    lines: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up patterns
    Query {
        #[command(flatten)]
        input: InputArgs,

        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,

        /// List every match position
        #[arg(short, long)]
        occurrences: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show tree statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let show_progress = !args.no_progress;
    let color = args.color.choice();
    let config = args.config.as_deref();

    match args.command {
        Commands::Query {
            input,
            patterns,
            occurrences,
            json,
        } => {
            let index = build_index(&input, config, show_progress)?;
            let results = index.query(&patterns, occurrences);
            if json {
                cli::output::print_json(&results)?;
            } else {
                cli::output::print_results(&results, color)?;
            }
        }
        Commands::Stats { input, json } => {
            let index = build_index(&input, config, show_progress)?;
            let stats = index.stats();
            if json {
                cli::output::print_json(&stats)?;
            } else {
                cli::output::print_stats(&stats, color)?;
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "gstree=debug",
        _ => "gstree=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file if given, otherwise size the tree for the input
fn load_config(path: Option<&Path>, total_symbols: usize) -> Result<TreeConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(TreeConfig::for_text_len(total_symbols)),
    }
}

fn build_index(input: &InputArgs, config: Option<&Path>, show_progress: bool) -> Result<RecordIndex> {
    let records = load_records(&input.inputs, input.lines)?;
    let total_symbols = records.iter().map(|r| r.bytes.len() + 1).sum();
    let config = load_config(config, total_symbols)?;
    RecordIndex::build(records, config, show_progress)
}
