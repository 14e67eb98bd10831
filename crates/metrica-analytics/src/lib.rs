//! Metrica Analytics
//!
//! Read-side analytics over stored metric records. Both operations are pure
//! functions over a record slice: they never touch the store, so the same
//! slice always resolves to the same answer.
//!
//! # Operations
//!
//! - **Daily snapshot**: latest known value of each `(security, metric)` pair
//!   on one calendar day ([`daily_snapshot`])
//! - **Largest change**: the security whose value for one metric moved the
//!   most, signed, between its first and last observations ([`largest_change`])
//!
//! # Example
//!
//! ```rust
//! use metrica_analytics::largest_change;
//! use metrica_core::{AsOfTime, MetricRecord};
//!
//! let records = vec![
//!     MetricRecord::new("SEC001", "yield", 5.0, AsOfTime::parse("2023-10-01T09:00").unwrap()),
//!     MetricRecord::new("SEC001", "yield", 7.0, AsOfTime::parse("2023-10-01T16:00").unwrap()),
//! ];
//!
//! let report = largest_change(&records, "yield").unwrap();
//! assert_eq!(report.security_id, "SEC001");
//! assert_eq!(report.change, 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod change;
mod error;
mod snapshot;

// Re-export core types
pub use change::{largest_change, ChangeReport};
pub use error::{AnalyticsError, AnalyticsResult};
pub use snapshot::daily_snapshot;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::change::{largest_change, ChangeReport};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::snapshot::daily_snapshot;
}
