//! Service error types.

use metrica_analytics::AnalyticsError;
use metrica_core::MetricError;
use metrica_store::StoreError;
use thiserror::Error;

/// Service operation result type.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error types.
///
/// Wraps the layer errors so callers deal with one type. Transport layers
/// that distinguish "bad request" from "not found" can use
/// [`ServiceError::is_not_found`] and match on `Validation` for the rest.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] MetricError),

    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Analytics operation failed.
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

impl ServiceError {
    /// Returns true when the error means "nothing matched", rather than a
    /// failure: an absent delete key or a metric with no records.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Store(err) => err.is_not_found(),
            Self::Analytics(AnalyticsError::NoMetrics { .. }) => true,
            Self::Validation(_) => false,
        }
    }
}
