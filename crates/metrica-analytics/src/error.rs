//! Analytics error types.

use thiserror::Error;

/// Analytics operation result type.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Analytics error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// No stored record carries the requested metric name.
    #[error("no metrics of kind '{metric_name}' found")]
    NoMetrics {
        /// The metric name that was requested.
        metric_name: String,
    },
}

impl AnalyticsError {
    /// Creates a `NoMetrics` error.
    #[must_use]
    pub fn no_metrics(metric_name: impl Into<String>) -> Self {
        Self::NoMetrics {
            metric_name: metric_name.into(),
        }
    }
}
