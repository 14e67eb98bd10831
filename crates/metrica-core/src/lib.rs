//! # Metrica Core
//!
//! Core types for the Metrica security metrics store.
//!
//! This crate provides the foundational building blocks used throughout Metrica:
//!
//! - [`MetricRecord`]: a single timestamped metric observation for a security
//! - [`AsOfTime`]: minute-precision observation timestamp with a fixed
//!   presentation format
//! - [`MetricError`]: validation errors raised at record construction
//!
//! ## Design Philosophy
//!
//! - **Valid By Construction**: a record cannot exist without a parseable
//!   observation timestamp
//! - **Open Vocabulary**: security ids and metric names are opaque strings,
//!   never enumerated or validated against a master list
//!
//! ## Example
//!
//! ```rust
//! use metrica_core::{AsOfTime, MetricRecord};
//!
//! let as_of = AsOfTime::parse("2023-10-01T16:00").unwrap();
//! let record = MetricRecord::new("S1", "Yield", 7.0, as_of);
//!
//! assert_eq!(record.as_of.to_string(), "10/01/2023 16:00");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{MetricError, MetricResult};
pub use types::{AsOfTime, MetricRecord};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MetricError, MetricResult};
    pub use crate::types::{AsOfTime, MetricRecord};
}
