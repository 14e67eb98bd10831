//! List command implementation.
//!
//! Lists stored metrics. With a date, the listing collapses to the latest
//! value per (security, metric) pair observed on that day.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use metrica_core::MetricRecord;
use metrica_service::{MetricQuery, MetricService};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::print_output;

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Snapshot date (YYYY-MM-DD); shows the latest value per pair on that day
    #[arg(short, long)]
    pub date: Option<String>,

    /// Only show metrics for this security
    #[arg(short, long)]
    pub security: Option<String>,
}

/// A metric row as rendered to the caller.
#[derive(Debug, Serialize, Tabled)]
pub struct MetricRow {
    #[tabled(rename = "Security")]
    #[serde(rename = "SecurityId")]
    pub security: String,

    #[tabled(rename = "Metric")]
    #[serde(rename = "MetricName")]
    pub metric: String,

    #[tabled(rename = "Value")]
    #[serde(rename = "MetricValue")]
    pub value: f64,

    #[tabled(rename = "As Of")]
    #[serde(rename = "AsOfDateTime")]
    pub as_of: String,
}

impl From<&MetricRecord> for MetricRow {
    fn from(record: &MetricRecord) -> Self {
        Self {
            security: record.security_id.clone(),
            metric: record.metric_name.clone(),
            value: record.metric_value,
            as_of: record.as_of.to_string(),
        }
    }
}

/// Execute the list command.
pub fn execute(service: &MetricService, args: ListArgs, format: OutputFormat) -> Result<()> {
    let mut query = MetricQuery::new();
    if let Some(date) = args.date.as_deref() {
        query = query.on_date(parse_date(date)?);
    }
    if let Some(security) = args.security.as_deref() {
        query = query.for_security(security);
    }

    let records = service.list_metrics(&query)?;
    let rows: Vec<MetricRow> = records.iter().map(MetricRow::from).collect();

    print_output(&rows, format)
}
