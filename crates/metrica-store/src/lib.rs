//! Metrica Storage Layer
//!
//! This crate provides the metric store and its persistence backends. The
//! store is an append-only collection of timestamped metric observations with
//! composite-key deletion; persistence is a pluggable collaborator so the
//! same store runs over a flat file, an embedded database, or memory.
//!
//! # Features
//!
//! - **Append-only adds**: no uniqueness constraint, duplicates coexist
//! - **Composite-key deletes**: exact `(security, metric, as-of)` match,
//!   removing every duplicate and reporting the count
//! - **Serialized mutations**: read-modify-write cycles behind a mutex
//! - **Multiple backends**: CSV flat file, redb, and in-memory
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use metrica_core::{AsOfTime, MetricRecord};
//! use metrica_store::{InMemoryPersistence, MetricStore};
//!
//! let store = MetricStore::new(Arc::new(InMemoryPersistence::new()));
//!
//! let as_of = AsOfTime::parse("2023-10-01T16:00").unwrap();
//! store.add(MetricRecord::new("SEC001", "price", 101.25, as_of)).unwrap();
//! assert_eq!(store.all().unwrap().len(), 1);
//! ```
//!
//! # Persistence Backends
//!
//! ## CsvPersistence
//!
//! Flat CSV file with the store's long-standing column headers. A missing
//! file loads as an empty collection; saves are temp-file-and-rename.
//!
//! ## RedbPersistence
//!
//! Uses [redb](https://crates.io/crates/redb), a pure-Rust embedded database
//! with ACID transactions. Suitable for single-process applications.
//!
//! ## InMemoryPersistence
//!
//! A simple in-memory implementation for testing and development.
//! Data is not persisted across restarts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod file;
mod memory;
mod persistence;
mod redb;
mod store;

// Re-export core types
pub use error::{StoreError, StoreResult};
pub use file::CsvPersistence;
pub use memory::InMemoryPersistence;
pub use persistence::MetricPersistence;
pub use redb::RedbPersistence;
pub use store::MetricStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{StoreError, StoreResult};
    pub use crate::file::CsvPersistence;
    pub use crate::memory::InMemoryPersistence;
    pub use crate::persistence::MetricPersistence;
    pub use crate::redb::RedbPersistence;
    pub use crate::store::MetricStore;
}
