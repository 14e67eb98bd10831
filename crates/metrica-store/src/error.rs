//! Store error types.

use metrica_core::{AsOfTime, MetricError};
use thiserror::Error;

/// Store operation result type.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error from the backing persistence layer.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// No record carries the requested composite key.
    #[error("No matching metric: security '{security_id}', metric '{metric_name}', as-of {as_of}")]
    NotFound {
        /// Security identifier that was requested.
        security_id: String,
        /// Metric name that was requested.
        metric_name: String,
        /// Timestamp that was requested.
        as_of: AsOfTime,
    },

    /// A persisted row failed validation while loading.
    #[error("Validation error: {0}")]
    Validation(#[from] MetricError),
}

impl StoreError {
    /// Creates a `NotFound` error for a composite key.
    #[must_use]
    pub fn not_found(security_id: impl Into<String>, metric_name: impl Into<String>, as_of: AsOfTime) -> Self {
        Self::NotFound {
            security_id: security_id.into(),
            metric_name: metric_name.into(),
            as_of,
        }
    }

    /// Returns true when the error signals an absent composite key.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            StoreError::Deserialization(err.to_string())
        } else {
            StoreError::Serialization(err.to_string())
        }
    }
}

impl From<redb::Error> for StoreError {
    fn from(err: redb::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<redb::DatabaseError> for StoreError {
    fn from(err: redb::DatabaseError) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(err: redb::TableError) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(err: redb::TransactionError) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(err: redb::CommitError) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(err: redb::StorageError) -> Self {
        StoreError::Persistence(err.to_string())
    }
}
