//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pageslice command-line driver
#[derive(Parser, Debug)]
#[command(name = "pageslice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (overridden by --verbose)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the walkthrough scenarios on one shared context
    Demo {
        /// Number of items (1..=N)
        #[arg(long, default_value = "10")]
        items: i64,
    },

    /// Compute a single page
    Page {
        /// Number of items (1..=N)
        #[arg(long, default_value = "10")]
        items: i64,

        /// Page number (values below 1 are treated as 1)
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Page size (floored to 1 and capped at max_per_page)
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,

        /// Keep only even numbers
        #[arg(long)]
        even: bool,

        /// Keep only numbers greater than this value
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Reverse the order before slicing
        #[arg(long)]
        reverse: bool,
    },

    /// Show the resolved pagination settings
    Settings,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one result per line)
    Json,
    /// Human-readable output
    Pretty,
}
