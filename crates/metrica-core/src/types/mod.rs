//! Domain types for the metrics store.
//!
//! - [`AsOfTime`]: minute-precision observation timestamp
//! - [`MetricRecord`]: a single metric observation for a security

mod asof;
mod record;

pub use asof::AsOfTime;
pub use record::MetricRecord;
