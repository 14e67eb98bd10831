//! Validation error types for the Metrica core.
//!
//! Everything that can go wrong while constructing a [`crate::MetricRecord`]
//! from raw input lives here. Persistence and query failures are defined by the
//! crates that own those concerns.

use thiserror::Error;

/// A specialized Result type for core validation.
pub type MetricResult<T> = Result<T, MetricError>;

/// Validation errors raised when building core types from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// The observation timestamp is present but cannot be parsed.
    #[error("invalid as-of timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The metric value is not numeric.
    #[error("invalid metric value '{value}': {reason}")]
    InvalidValue {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A required field is missing or empty.
    #[error("missing required field: {name}")]
    MissingField {
        /// Name of the absent field.
        name: String,
    },
}

impl MetricError {
    /// Creates an invalid timestamp error.
    #[must_use]
    pub fn invalid_timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField { name: name.into() }
    }
}
