//! Service configuration.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use metrica_store::{CsvPersistence, MetricPersistence, MetricStore, RedbPersistence};

use crate::error::ServiceResult;

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Flat CSV file.
    Csv,
    /// Embedded redb database.
    Redb,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Csv => write!(f, "csv"),
            BackendKind::Redb => write!(f, "redb"),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Storage backend kind
    #[serde(default = "default_backend")]
    pub backend: BackendKind,

    /// Metrics data file path (CSV file or redb database, per backend)
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

fn default_backend() -> BackendKind {
    BackendKind::Csv
}

fn default_metrics_path() -> String {
    "./data/metrics.csv".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Builds a store over the configured backend and data path.
    pub fn open_store(&self) -> ServiceResult<MetricStore> {
        let persistence: Arc<dyn MetricPersistence> = match self.backend {
            BackendKind::Csv => Arc::new(CsvPersistence::new(&self.metrics_path)),
            BackendKind::Redb => Arc::new(RedbPersistence::open(&self.metrics_path)?),
        };
        tracing::debug!(backend = %self.backend, path = %self.metrics_path, "Opened metric store");
        Ok(MetricStore::new(persistence))
    }
}
