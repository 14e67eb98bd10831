//! Metrica CLI - Command-line interface for the security metrics store.
//!
//! # Usage
//!
//! ```bash
//! # Record a metric observation
//! metrica add --security SEC001 --metric yield --value 5.0 --as-of 2023-10-01T09:00
//!
//! # Delete observations matching an exact key
//! metrica delete --security SEC001 --metric yield --as-of 2023-10-01T09:00
//!
//! # List the latest value per (security, metric) pair on a day
//! metrica list --date 2023-10-01
//!
//! # Find the security whose metric moved the most
//! metrica largest-change --metric yield
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    let service = commands::open_service(cli.config.as_deref(), cli.data.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Add(args) => commands::add::execute(&service, args, cli.quiet)?,
        Commands::Delete(args) => commands::delete::execute(&service, args, cli.quiet)?,
        Commands::List(args) => commands::list::execute(&service, args, format)?,
        Commands::LargestChange(args) => commands::change::execute(&service, args, format)?,
    }

    Ok(())
}
