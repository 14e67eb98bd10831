//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AddArgs, DeleteArgs, LargestChangeArgs, ListArgs};

/// Metrica - Security metrics capture and analysis CLI
#[derive(Parser)]
#[command(name = "metrica")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "METRICA_CONFIG")]
    pub config: Option<String>,

    /// Metrics file path, overriding the configured location
    #[arg(long, global = true, env = "METRICA_DATA")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Record a metric observation for a security
    Add(AddArgs),

    /// Delete observations matching an exact (security, metric, as-of) key
    Delete(DeleteArgs),

    /// List stored metrics, optionally as a latest-per-day snapshot
    List(ListArgs),

    /// Find the security with the largest signed change in a metric
    LargestChange(LargestChangeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
