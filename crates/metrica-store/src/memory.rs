//! In-memory persistence backend.
//!
//! Provides a simple in-memory implementation of the MetricPersistence trait.
//! Useful for testing and development. Data is not persisted across restarts.

use std::sync::RwLock;

use metrica_core::MetricRecord;

use crate::error::{StoreError, StoreResult};
use crate::persistence::MetricPersistence;

/// In-memory persistence backend.
///
/// Holds the record collection in a `RwLock`-guarded vector. Thread-safe,
/// order-preserving, and empty on construction.
///
/// # Example
///
/// ```rust
/// use metrica_store::{InMemoryPersistence, MetricPersistence};
///
/// let backend = InMemoryPersistence::new();
/// assert!(backend.load().unwrap().is_empty());
/// ```
pub struct InMemoryPersistence {
    records: RwLock<Vec<MetricRecord>>,
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPersistence {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Clears all records.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.write() {
            records.clear();
        }
    }
}

impl MetricPersistence for InMemoryPersistence {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> StoreResult<Vec<MetricRecord>> {
        Ok(self
            .records
            .read()
            .map_err(|e| StoreError::Persistence(format!("Lock error: {}", e)))?
            .clone())
    }

    fn save(&self, records: &[MetricRecord]) -> StoreResult<()> {
        *self
            .records
            .write()
            .map_err(|e| StoreError::Persistence(format!("Lock error: {}", e)))? = records.to_vec();
        Ok(())
    }
}
