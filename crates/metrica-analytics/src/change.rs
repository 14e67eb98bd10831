//! Largest-change analysis.
//!
//! Finds the security whose value for one metric moved the most over its
//! recorded history. "Most" is the most positive signed change between the
//! chronologically first and last observations, not the largest magnitude:
//! a drop of 10 loses to a rise of 1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use metrica_core::MetricRecord;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Outcome of a largest-change analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeReport {
    /// Security whose metric changed the most.
    pub security_id: String,
    /// Chronologically first observed value.
    pub first_value: f64,
    /// Chronologically last observed value.
    pub last_value: f64,
    /// Signed change, `last_value - first_value`.
    pub change: f64,
}

impl std::fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({:+})",
            self.security_id, self.first_value, self.last_value, self.change
        )
    }
}

/// Finds the security with the largest signed change in one metric.
///
/// Observations of the metric are sorted by timestamp (stable, so stored
/// order breaks exact-minute ties), then each security's change is taken as
/// last value minus first value. A security with a single observation has a
/// change of zero. Ties go to the first security in ascending id order.
///
/// # Arguments
///
/// * `records` - Record sequence in stored order
/// * `metric_name` - Metric to analyze; matched exactly
///
/// # Errors
///
/// Returns `AnalyticsError::NoMetrics` when no record carries the metric, or
/// when no security's change is rankable (every change is NaN).
pub fn largest_change(records: &[MetricRecord], metric_name: &str) -> AnalyticsResult<ChangeReport> {
    let mut observations: Vec<&MetricRecord> = records
        .iter()
        .filter(|record| record.metric_name == metric_name)
        .collect();
    if observations.is_empty() {
        return Err(AnalyticsError::no_metrics(metric_name));
    }
    observations.sort_by_key(|record| record.as_of);

    // (first, last) observed value per security, keyed in ascending id order.
    let mut spans: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for record in observations {
        spans
            .entry(record.security_id.as_str())
            .and_modify(|span| span.1 = record.metric_value)
            .or_insert((record.metric_value, record.metric_value));
    }

    let mut winner: Option<ChangeReport> = None;
    for (security_id, (first_value, last_value)) in spans {
        let change = last_value - first_value;
        if change.is_nan() {
            continue;
        }
        let leads = match &winner {
            Some(current) => change > current.change,
            None => true,
        };
        if leads {
            winner = Some(ChangeReport {
                security_id: security_id.to_string(),
                first_value,
                last_value,
                change,
            });
        }
    }

    winner.ok_or_else(|| AnalyticsError::no_metrics(metric_name))
}
