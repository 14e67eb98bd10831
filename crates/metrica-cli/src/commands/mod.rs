//! CLI command implementations.

pub mod add;
pub mod change;
pub mod delete;
pub mod list;

// Re-export submodules for convenience
pub use add::AddArgs;
pub use change::LargestChangeArgs;
pub use delete::DeleteArgs;
pub use list::ListArgs;

use anyhow::Result;
use chrono::NaiveDate;

use metrica_service::{MetricService, ServiceConfig};

use crate::error::{CliError, CliResult};

/// Calendar date shapes accepted on the command line.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a calendar date in YYYY-MM-DD or MM/DD/YYYY form.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }
    Err(CliError::InvalidDate(s.to_string()))
}

/// Opens the metric service from an optional config file and data-path override.
pub fn open_service(config_path: Option<&str>, data_path: Option<&str>) -> Result<MetricService> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::from_file(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path, e)))?,
        None => ServiceConfig::default(),
    };

    if let Some(path) = data_path {
        config.metrics_path = path.to_string();
    }

    Ok(MetricService::from_config(&config)?)
}
