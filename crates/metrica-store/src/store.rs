//! The metric store.
//!
//! `MetricStore` is the mutation and query surface over a persistence
//! backend. It holds no record state of its own: every operation reloads the
//! collection from the backend, so the backend is always the source of truth.

use std::sync::{Arc, Mutex};

use metrica_core::{AsOfTime, MetricRecord};

use crate::error::{StoreError, StoreResult};
use crate::persistence::MetricPersistence;

/// Append-only metric store over an injected persistence backend.
///
/// Mutations run a read-modify-write cycle against the backend. The cycle is
/// serialized by an internal mutex, so interleaved `add`/`delete` calls from
/// multiple threads cannot lose writes. Reads go straight to the backend.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use metrica_core::{AsOfTime, MetricRecord};
/// use metrica_store::{InMemoryPersistence, MetricStore};
///
/// let store = MetricStore::new(Arc::new(InMemoryPersistence::new()));
///
/// let as_of = AsOfTime::parse("2023-10-01T16:00").unwrap();
/// store.add(MetricRecord::new("SEC001", "price", 101.25, as_of)).unwrap();
///
/// assert_eq!(store.all().unwrap().len(), 1);
/// assert_eq!(store.delete("SEC001", "price", as_of).unwrap(), 1);
/// ```
pub struct MetricStore {
    persistence: Arc<dyn MetricPersistence>,
    write_lock: Mutex<()>,
}

impl MetricStore {
    /// Creates a store over the given persistence backend.
    #[must_use]
    pub fn new(persistence: Arc<dyn MetricPersistence>) -> Self {
        Self {
            persistence,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backend name of the underlying persistence.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.persistence.backend_name()
    }

    /// Appends a record.
    ///
    /// No uniqueness is enforced; a record identical to an existing one is
    /// stored alongside it.
    ///
    /// # Errors
    ///
    /// Fails only if the backing load or save fails.
    pub fn add(&self, record: MetricRecord) -> StoreResult<()> {
        let _guard = self.lock_writes()?;
        let mut records = self.persistence.load()?;
        records.push(record);
        self.persistence.save(&records)
    }

    /// Removes every record matching the composite key exactly.
    ///
    /// Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when nothing matches; the backing store
    /// is not rewritten in that case.
    pub fn delete(&self, security_id: &str, metric_name: &str, as_of: AsOfTime) -> StoreResult<usize> {
        let _guard = self.lock_writes()?;
        let mut records = self.persistence.load()?;
        let before = records.len();
        records.retain(|record| !record.matches_key(security_id, metric_name, as_of));
        let removed = before - records.len();

        if removed == 0 {
            return Err(StoreError::not_found(security_id, metric_name, as_of));
        }

        self.persistence.save(&records)?;
        Ok(removed)
    }

    /// Returns the full record sequence as currently persisted.
    pub fn all(&self) -> StoreResult<Vec<MetricRecord>> {
        self.persistence.load()
    }

    /// Returns the records belonging to one security, in stored order.
    pub fn for_security(&self, security_id: &str) -> StoreResult<Vec<MetricRecord>> {
        let mut records = self.persistence.load()?;
        records.retain(|record| record.security_id == security_id);
        Ok(records)
    }

    fn lock_writes(&self) -> StoreResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| StoreError::Persistence(format!("Lock error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPersistence;

    fn store() -> MetricStore {
        MetricStore::new(Arc::new(InMemoryPersistence::new()))
    }

    fn record(security_id: &str, metric_name: &str, value: f64, as_of: &str) -> MetricRecord {
        MetricRecord::new(security_id, metric_name, value, AsOfTime::parse(as_of).unwrap())
    }

    #[test]
    fn test_add_then_all_round_trips() {
        let store = store();
        store.add(record("SEC001", "price", 101.25, "2023-10-01T09:00")).unwrap();
        store.add(record("SEC002", "yield", 5.0, "2023-10-01T10:00")).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].security_id, "SEC001");
        assert_eq!(all[1].security_id, "SEC002");
    }

    #[test]
    fn test_add_keeps_duplicates() {
        let store = store();
        let sample = record("SEC001", "price", 101.25, "2023-10-01T09:00");
        store.add(sample.clone()).unwrap();
        store.add(sample).unwrap();

        assert_eq!(store.all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_removes_exact_match() {
        let store = store();
        store.add(record("SEC001", "price", 101.25, "2023-10-01T09:00")).unwrap();
        store.add(record("SEC001", "price", 102.0, "2023-10-01T16:00")).unwrap();

        let as_of = AsOfTime::parse("2023-10-01T09:00").unwrap();
        let removed = store.delete("SEC001", "price", as_of).unwrap();
        assert_eq!(removed, 1);

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].metric_value, 102.0);
    }

    #[test]
    fn test_delete_removes_all_duplicates_and_counts() {
        let store = store();
        let as_of = "2023-10-01T09:00";
        store.add(record("SEC001", "price", 101.25, as_of)).unwrap();
        store.add(record("SEC001", "price", 999.0, as_of)).unwrap();
        store.add(record("SEC001", "yield", 5.0, as_of)).unwrap();

        let key = AsOfTime::parse(as_of).unwrap();
        let removed = store.delete("SEC001", "price", key).unwrap();
        assert_eq!(removed, 2);

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].metric_name, "yield");
    }

    #[test]
    fn test_delete_absent_key_is_not_found_and_leaves_store_unchanged() {
        let store = store();
        store.add(record("SEC001", "price", 101.25, "2023-10-01T09:00")).unwrap();

        let other = AsOfTime::parse("2023-10-01T10:00").unwrap();
        let err = store.delete("SEC001", "price", other).unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_matches_parsed_instant_not_text() {
        let store = store();
        store.add(record("SEC001", "price", 101.25, "2023-10-01T09:00")).unwrap();

        // Same minute written in a different input shape still matches.
        let key = AsOfTime::parse("10/01/2023 09:00").unwrap();
        assert_eq!(store.delete("SEC001", "price", key).unwrap(), 1);
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn test_for_security_filters_and_preserves_order() {
        let store = store();
        store.add(record("SEC002", "price", 98.0, "2023-10-01T09:00")).unwrap();
        store.add(record("SEC001", "price", 101.25, "2023-10-01T10:00")).unwrap();
        store.add(record("SEC001", "yield", 5.0, "2023-10-01T11:00")).unwrap();

        let filtered = store.for_security("SEC001").unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].metric_name, "price");
        assert_eq!(filtered[1].metric_name, "yield");

        assert!(store.for_security("SEC999").unwrap().is_empty());
    }

    #[test]
    fn test_backend_name_delegates() {
        assert_eq!(store().backend_name(), "memory");
    }
}
