//! Command line argument parsing for the search-transformer CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// search-transformer - Convert multi-search backend responses into the public search API shape
#[derive(Parser, Debug, Clone)]
#[command(name = "search-transformer")]
#[command(about = "Convert multi-search backend responses into the public search API shape")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TransformerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TransformerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Transform a backend multi-search response into a public response
    Transform(TransformArgs),

    /// Extract match spans from a single highlighted fragment
    Highlight(HighlightArgs),

    /// Show the fallback suggestion terms for a query
    Terms(TermsArgs),
}

/// Arguments for transforming a backend response
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Backend response file (JSON), or "-" to read standard input
    #[arg(value_name = "RESPONSE_FILE")]
    pub response_file: PathBuf,

    /// Original query text, used for suggestions when nothing matched
    #[arg(long, default_value = "")]
    pub query: String,

    /// Transformer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SEARCH_TRANSFORMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not add query terms as suggestions for empty results
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments for highlight extraction
#[derive(Parser, Debug, Clone)]
pub struct HighlightArgs {
    /// Highlighted fragment text
    #[arg(value_name = "FRAGMENT")]
    pub fragment: String,

    /// Marker opening a match
    #[arg(long, default_value = crate::config::DEFAULT_START_TAG)]
    pub start_tag: String,

    /// Marker closing a match
    #[arg(long, default_value = crate::config::DEFAULT_END_TAG)]
    pub end_tag: String,
}

/// Arguments for query term tokenization
#[derive(Parser, Debug, Clone)]
pub struct TermsArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
