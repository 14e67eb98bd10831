//! Add command implementation.
//!
//! Records a single metric observation.

use anyhow::Result;
use clap::Args;

use metrica_core::{AsOfTime, MetricRecord};
use metrica_service::MetricService;

use crate::output::print_success;

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Security identifier (e.g. SEC001)
    #[arg(short, long)]
    pub security: String,

    /// Metric name (e.g. yield)
    #[arg(short, long)]
    pub metric: String,

    /// Observed value
    #[arg(short, long)]
    pub value: f64,

    /// Observation timestamp (e.g. 2023-10-01T09:00); stored at minute precision
    #[arg(short, long)]
    pub as_of: String,
}

/// Execute the add command.
pub fn execute(service: &MetricService, args: AddArgs, quiet: bool) -> Result<()> {
    let as_of = AsOfTime::parse(&args.as_of)?;
    let record = MetricRecord::new(args.security.as_str(), args.metric.as_str(), args.value, as_of);

    service.add_metric(record)?;

    if !quiet {
        print_success(&format!(
            "Added {} {} = {} at {}",
            args.security, args.metric, args.value, as_of
        ));
    }

    Ok(())
}
