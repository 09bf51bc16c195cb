//! CLI argument parsing for Lacuna

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lacuna")]
#[command(version)]
#[command(about = "Find phonotactic holes: category patterns whose parts occur in a lexicon but whose whole does not", long_about = None)]
pub struct Cli {
    /// Category pattern (e.g., VCC)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Lexicon file: whitespace-separated words
    #[arg(short = 'l', long = "lexicon", value_name = "FILE")]
    pub lexicon: PathBuf,

    /// Category table (TOML); defaults to the built-in Old Mtsqrveli inventory
    #[arg(short = 'C', long = "categories", value_name = "FILE")]
    pub categories: Option<PathBuf>,

    /// Show per-instantiation statistics instead of holes
    #[arg(short = 'c', long = "summary")]
    pub statistics: bool,

    /// Show only the N most frequent instantiations (requires -c)
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write JSON results to FILE in addition to stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include prefix/suffix counts for each hole
    #[arg(long = "counts")]
    pub counts: bool,

    /// Minimum count for both overlapping parts of a hole
    #[arg(long = "min-part-count", value_name = "N", default_value = "1")]
    pub min_part_count: u64,

    /// Maximum count of the whole sequence still reported as a hole
    #[arg(long = "max-whole-count", value_name = "N", default_value = "0")]
    pub max_whole_count: u64,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
