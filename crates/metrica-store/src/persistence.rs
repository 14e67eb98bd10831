//! Persistence collaborator trait definition.
//!
//! This module defines the `MetricPersistence` trait that all persistence
//! backends implement. The store itself is format-agnostic; any backend that
//! can load and save a record collection satisfies it.

use metrica_core::MetricRecord;

use crate::error::StoreResult;

/// Persistence collaborator for the metric store.
///
/// Backends hold the durable copy of the record collection. The store reloads
/// through `load` before every operation and writes back through `save`, so a
/// backend only needs whole-collection semantics, not row-level operations.
///
/// The trait is synchronous; the store serializes its own read-modify-write
/// cycles, so backends may assume single-writer access within one process.
///
/// # Example
///
/// ```rust,ignore
/// use metrica_store::{CsvPersistence, MetricPersistence};
///
/// let backend = CsvPersistence::new("./data/metrics.csv");
/// let records = backend.load()?;
/// backend.save(&records)?;
/// ```
pub trait MetricPersistence: Send + Sync {
    /// Returns the backend name for logging.
    fn backend_name(&self) -> &'static str;

    /// Loads the full record collection.
    ///
    /// An empty backing store (including one that has never been written)
    /// loads as an empty collection, not an error.
    fn load(&self) -> StoreResult<Vec<MetricRecord>>;

    /// Replaces the full record collection.
    fn save(&self, records: &[MetricRecord]) -> StoreResult<()>;
}
