//! Metrica Service Layer
//!
//! The caller-facing facade over the store and the analytics functions. Any
//! front end (the bundled CLI, or a transport layer of your own) drives these
//! four operations:
//!
//! - **add_metric**: record one observation
//! - **delete_metric**: remove every record matching a composite key
//! - **list_metrics**: raw listing, or a daily snapshot when a date is given,
//!   optionally narrowed to one security
//! - **largest_change**: the security whose metric moved the most
//!
//! Configuration selects the storage backend and data path; see
//! [`ServiceConfig`].
//!
//! # Example
//!
//! ```rust,ignore
//! use metrica_service::{MetricService, ServiceConfig};
//!
//! let config = ServiceConfig::from_file("metrica.toml")?;
//! let service = MetricService::from_config(&config)?;
//! let report = service.largest_change("yield")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod service;

// Re-export core types
pub use config::{BackendKind, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use service::{MetricQuery, MetricService};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{BackendKind, ServiceConfig};
    pub use crate::error::{ServiceError, ServiceResult};
    pub use crate::service::{MetricQuery, MetricService};
}
