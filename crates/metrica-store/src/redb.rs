//! Redb persistence backend.
//!
//! Implements the MetricPersistence trait over redb, a pure-Rust embedded
//! database with ACID transactions. Suitable for single-process deployments
//! that want durability without a flat file.

use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};

use metrica_core::MetricRecord;

use crate::error::StoreResult;
use crate::persistence::MetricPersistence;

/// Records keyed by insertion ordinal, values serde_json-encoded.
const METRICS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("metrics");

/// Redb persistence backend.
///
/// The whole collection lives in one ordinal-keyed table; `load` walks it in
/// key order, so the persisted sequence order survives the round trip. `save`
/// replaces the table inside a single write transaction.
///
/// # Example
///
/// ```rust,ignore
/// use metrica_store::{MetricPersistence, RedbPersistence};
///
/// let backend = RedbPersistence::open("./data/metrics.redb")?;
/// let records = backend.load()?;
/// ```
pub struct RedbPersistence {
    db: Database,
}

impl RedbPersistence {
    /// Opens or creates a database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let backend = Self { db };
        backend.initialize_table()?;
        Ok(backend)
    }

    fn initialize_table(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(METRICS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl MetricPersistence for RedbPersistence {
    fn backend_name(&self) -> &'static str {
        "redb"
    }

    fn load(&self) -> StoreResult<Vec<MetricRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(METRICS_TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let record: MetricRecord = serde_json::from_slice(value.value())?;
            records.push(record);
        }
        Ok(records)
    }

    fn save(&self, records: &[MetricRecord]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            write_txn.delete_table(METRICS_TABLE)?;
            let mut table = write_txn.open_table(METRICS_TABLE)?;
            for (ordinal, record) in records.iter().enumerate() {
                let data = serde_json::to_vec(record)?;
                table.insert(ordinal as u64, data.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}
