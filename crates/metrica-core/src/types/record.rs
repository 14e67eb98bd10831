//! Metric observation record.

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, MetricResult};
use crate::types::AsOfTime;

/// A single metric observation for a security.
///
/// Records are identified by the composite key `(security_id, metric_name,
/// as_of)`. The store keeps every record it is given, so duplicate keys and
/// even fully identical rows can coexist.
///
/// Serde field names follow the on-disk column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Identifier of the security the observation belongs to.
    #[serde(rename = "SecurityId")]
    pub security_id: String,
    /// Name of the observed metric, e.g. `price` or `duration`.
    #[serde(rename = "MetricName")]
    pub metric_name: String,
    /// Observed value.
    #[serde(rename = "MetricValue")]
    pub metric_value: f64,
    /// When the observation was taken.
    #[serde(rename = "AsOfDateTime")]
    pub as_of: AsOfTime,
}

impl MetricRecord {
    /// Creates a record from already-validated components.
    #[must_use]
    pub fn new(
        security_id: impl Into<String>,
        metric_name: impl Into<String>,
        metric_value: f64,
        as_of: AsOfTime,
    ) -> Self {
        Self {
            security_id: security_id.into(),
            metric_name: metric_name.into(),
            metric_value,
            as_of,
        }
    }

    /// Builds a record from raw text fields, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::MissingField` when an identifier is blank,
    /// `MetricError::InvalidValue` when the value is not numeric, and
    /// whatever [`AsOfTime::parse`] reports for the timestamp.
    pub fn from_parts(
        security_id: &str,
        metric_name: &str,
        metric_value: &str,
        as_of: &str,
    ) -> MetricResult<Self> {
        let security_id = security_id.trim();
        if security_id.is_empty() {
            return Err(MetricError::missing_field("SecurityId"));
        }
        let metric_name = metric_name.trim();
        if metric_name.is_empty() {
            return Err(MetricError::missing_field("MetricName"));
        }
        let value: f64 = metric_value
            .trim()
            .parse()
            .map_err(|_| MetricError::invalid_value(metric_value.trim(), "not a number"))?;
        let as_of = AsOfTime::parse(as_of)?;
        Ok(Self::new(security_id, metric_name, value, as_of))
    }

    /// Reports whether this record carries the given composite key.
    ///
    /// Matching is exact on all three components; the value plays no part.
    #[must_use]
    pub fn matches_key(&self, security_id: &str, metric_name: &str, as_of: AsOfTime) -> bool {
        self.security_id == security_id && self.metric_name == metric_name && self.as_of == as_of
    }
}
