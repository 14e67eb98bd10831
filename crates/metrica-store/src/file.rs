//! CSV file persistence backend.
//!
//! Stores the record collection as a flat CSV file with one header row. This
//! is the on-disk shape the store has always used, so existing data files load
//! unchanged.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use metrica_core::MetricRecord;

use crate::error::StoreResult;
use crate::persistence::MetricPersistence;

/// Column headers of the metrics file.
const CSV_HEADERS: [&str; 4] = ["SecurityId", "MetricName", "MetricValue", "AsOfDateTime"];

/// CSV row shape. Values stay text here; coercion happens when the domain
/// record is built, so a bad cell surfaces as a validation error rather than
/// a file-format error.
#[derive(Debug, Deserialize)]
struct MetricRow {
    #[serde(rename = "SecurityId")]
    security_id: String,
    #[serde(rename = "MetricName")]
    metric_name: String,
    #[serde(rename = "MetricValue")]
    metric_value: String,
    #[serde(rename = "AsOfDateTime")]
    as_of: String,
}

/// CSV file persistence backend.
///
/// A missing file loads as an empty collection, so a fresh deployment starts
/// from nothing without any setup step. Saves go through a temp file and a
/// rename, keeping the previous file intact if the write fails midway.
///
/// # Example
///
/// ```rust,ignore
/// use metrica_store::{CsvPersistence, MetricPersistence};
///
/// let backend = CsvPersistence::new("./data/metrics.csv");
/// let records = backend.load()?;
/// ```
pub struct CsvPersistence {
    path: PathBuf,
}

impl CsvPersistence {
    /// Creates a backend over the given file path.
    ///
    /// The file is not touched until the first `load` or `save`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricPersistence for CsvPersistence {
    fn backend_name(&self) -> &'static str {
        "csv"
    }

    fn load(&self) -> StoreResult<Vec<MetricRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new()); // Empty source
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let row: MetricRow = result?;
            records.push(MetricRecord::from_parts(
                &row.security_id,
                &row.metric_name,
                &row.metric_value,
                &row.as_of,
            )?);
        }
        Ok(records)
    }

    fn save(&self, records: &[MetricRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            writer.write_record(CSV_HEADERS)?;
            for record in records {
                writer.write_record(&[
                    record.security_id.clone(),
                    record.metric_name.clone(),
                    record.metric_value.to_string(),
                    record.as_of.to_string(),
                ])?;
            }
            writer.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
