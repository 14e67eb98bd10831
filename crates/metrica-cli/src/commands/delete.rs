//! Delete command implementation.
//!
//! Removes every observation matching an exact composite key.

use anyhow::Result;
use clap::Args;

use metrica_core::AsOfTime;
use metrica_service::MetricService;

use crate::output::print_success;

/// Arguments for the delete command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Security identifier
    #[arg(short, long)]
    pub security: String,

    /// Metric name
    #[arg(short, long)]
    pub metric: String,

    /// Observation timestamp of the records to remove
    #[arg(short, long)]
    pub as_of: String,
}

/// Execute the delete command.
pub fn execute(service: &MetricService, args: DeleteArgs, quiet: bool) -> Result<()> {
    let as_of = AsOfTime::parse(&args.as_of)?;

    let removed = service.delete_metric(&args.security, &args.metric, as_of)?;

    if !quiet {
        print_success(&format!(
            "Deleted {} record(s) for {} {} at {}",
            removed, args.security, args.metric, as_of
        ));
    }

    Ok(())
}
