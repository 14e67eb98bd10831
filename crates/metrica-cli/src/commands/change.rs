//! Largest-change command implementation.
//!
//! Reports the security whose metric moved the most between its first and
//! last observation.

use anyhow::Result;
use clap::Args;

use metrica_analytics::ChangeReport;
use metrica_service::MetricService;

use crate::cli::OutputFormat;
use crate::output::{print_output, print_single, KeyValue};

/// Arguments for the largest-change command.
#[derive(Args, Debug)]
pub struct LargestChangeArgs {
    /// Metric name to analyze
    #[arg(short, long)]
    pub metric: String,
}

/// Execute the largest-change command.
pub fn execute(
    service: &MetricService,
    args: LargestChangeArgs,
    format: OutputFormat,
) -> Result<()> {
    let report = service.largest_change(&args.metric)?;

    match format {
        OutputFormat::Table => print_output(&report_rows(&report), format),
        _ => print_single(&report, format),
    }
}

/// Key-value rows for the table rendering of a change report.
fn report_rows(report: &ChangeReport) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Security", report.security_id.clone()),
        KeyValue::new("First Value", report.first_value.to_string()),
        KeyValue::new("Last Value", report.last_value.to_string()),
        KeyValue::new("Change", format!("{:+}", report.change)),
    ]
}
