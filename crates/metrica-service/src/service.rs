//! The metric service facade.
//!
//! `MetricService` is what callers talk to: it maps the four caller-facing
//! operations onto the store and the analytics functions and instruments
//! them. A transport layer in front of it only parses input and formats
//! output; no business rules live outside this crate boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use metrica_analytics::{daily_snapshot, largest_change, ChangeReport};
use metrica_core::{AsOfTime, MetricError, MetricRecord};
use metrica_store::MetricStore;

use crate::config::ServiceConfig;
use crate::error::ServiceResult;

/// Filter criteria for listing metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricQuery {
    /// Resolve a daily snapshot for this date instead of listing raw records.
    pub date: Option<NaiveDate>,
    /// Narrow the result to one security.
    pub security_id: Option<String>,
}

impl MetricQuery {
    /// Creates a new empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a snapshot for the given date.
    #[must_use]
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Narrows the result to one security.
    #[must_use]
    pub fn for_security(mut self, security_id: impl Into<String>) -> Self {
        self.security_id = Some(security_id.into());
        self
    }
}

/// Caller-facing metric service.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use metrica_core::{AsOfTime, MetricRecord};
/// use metrica_service::{MetricQuery, MetricService};
/// use metrica_store::{InMemoryPersistence, MetricStore};
///
/// let service = MetricService::new(MetricStore::new(Arc::new(InMemoryPersistence::new())));
///
/// let as_of = AsOfTime::parse("2023-10-01T16:00").unwrap();
/// service.add_metric(MetricRecord::new("SEC001", "yield", 5.0, as_of)).unwrap();
///
/// let rows = service.list_metrics(&MetricQuery::new()).unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
pub struct MetricService {
    store: MetricStore,
}

impl MetricService {
    /// Creates a service over an existing store.
    #[must_use]
    pub fn new(store: MetricStore) -> Self {
        Self { store }
    }

    /// Creates a service over the store the configuration describes.
    pub fn from_config(config: &ServiceConfig) -> ServiceResult<Self> {
        Ok(Self::new(config.open_store()?))
    }

    /// Returns the backend name of the underlying store.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Records one metric observation.
    ///
    /// # Errors
    ///
    /// Rejects records whose security id or metric name is blank.
    pub fn add_metric(&self, record: MetricRecord) -> ServiceResult<()> {
        if record.security_id.trim().is_empty() {
            return Err(MetricError::missing_field("SecurityId").into());
        }
        if record.metric_name.trim().is_empty() {
            return Err(MetricError::missing_field("MetricName").into());
        }
        tracing::info!(
            security_id = %record.security_id,
            metric_name = %record.metric_name,
            value = record.metric_value,
            as_of = %record.as_of,
            "Adding metric"
        );
        self.store.add(record)?;
        Ok(())
    }

    /// Removes every record matching the composite key, returning the count.
    ///
    /// # Errors
    ///
    /// Signals not-found (via `StoreError::NotFound`) when nothing matches.
    pub fn delete_metric(
        &self,
        security_id: &str,
        metric_name: &str,
        as_of: AsOfTime,
    ) -> ServiceResult<usize> {
        let removed = self.store.delete(security_id, metric_name, as_of)?;
        tracing::info!(
            security_id = %security_id,
            metric_name = %metric_name,
            as_of = %as_of,
            removed,
            "Deleted metric records"
        );
        Ok(removed)
    }

    /// Lists metrics per the query.
    ///
    /// With a date, resolves the daily snapshot first and then narrows to the
    /// security if one was given; a security whose history falls outside the
    /// date simply does not appear. Without a date, returns raw stored
    /// records, narrowed to the security if one was given.
    pub fn list_metrics(&self, query: &MetricQuery) -> ServiceResult<Vec<MetricRecord>> {
        let rows = match (query.date, query.security_id.as_deref()) {
            (Some(date), security_id) => {
                let snapshot = daily_snapshot(&self.store.all()?, date);
                match security_id {
                    Some(id) => snapshot
                        .into_iter()
                        .filter(|record| record.security_id == id)
                        .collect(),
                    None => snapshot,
                }
            }
            (None, Some(id)) => self.store.for_security(id)?,
            (None, None) => self.store.all()?,
        };
        tracing::debug!(count = rows.len(), "Listed metrics");
        Ok(rows)
    }

    /// Finds the security with the largest signed change in one metric.
    pub fn largest_change(&self, metric_name: &str) -> ServiceResult<ChangeReport> {
        let report = largest_change(&self.store.all()?, metric_name)?;
        tracing::debug!(
            metric_name = %metric_name,
            security_id = %report.security_id,
            change = report.change,
            "Resolved largest change"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use metrica_store::InMemoryPersistence;

    use crate::error::ServiceError;

    fn service() -> MetricService {
        MetricService::new(MetricStore::new(Arc::new(InMemoryPersistence::new())))
    }

    fn record(security_id: &str, metric_name: &str, value: f64, as_of: &str) -> MetricRecord {
        MetricRecord::new(security_id, metric_name, value, AsOfTime::parse(as_of).unwrap())
    }

    fn day(input: &str) -> NaiveDate {
        input.parse().unwrap()
    }

    #[test]
    fn test_add_then_list_all() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 10.0, "2023-10-01T10:00")).unwrap();

        let rows = service.list_metrics(&MetricQuery::new()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_identifiers() {
        let service = service();

        let err = service
            .add_metric(record("   ", "yield", 5.0, "2023-10-01T09:00"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(!err.is_not_found());

        let err = service
            .add_metric(record("SEC001", "", 5.0, "2023-10-01T09:00"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert!(service.list_metrics(&MetricQuery::new()).unwrap().is_empty());
    }

    #[test]
    fn test_list_with_date_resolves_snapshot() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC001", "yield", 7.0, "2023-10-01T16:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 10.0, "2023-10-01T10:00")).unwrap();

        let rows = service
            .list_metrics(&MetricQuery::new().on_date(day("2023-10-01")))
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].security_id, "SEC001");
        assert_eq!(rows[0].metric_value, 7.0);
        assert_eq!(rows[0].as_of.to_string(), "10/01/2023 16:00");
        assert_eq!(rows[1].security_id, "SEC002");
        assert_eq!(rows[1].metric_value, 10.0);
    }

    #[test]
    fn test_security_narrowing_applies_after_snapshot() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-09-30T09:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 10.0, "2023-10-01T10:00")).unwrap();

        // SEC001 has history, but none on the queried date.
        let rows = service
            .list_metrics(&MetricQuery::new().on_date(day("2023-10-01")).for_security("SEC001"))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_list_without_date_narrows_to_security_history() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-09-30T09:00")).unwrap();
        service.add_metric(record("SEC001", "yield", 7.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 10.0, "2023-10-01T10:00")).unwrap();

        let rows = service
            .list_metrics(&MetricQuery::new().for_security("SEC001"))
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.security_id == "SEC001"));
    }

    #[test]
    fn test_list_is_idempotent_without_mutation() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 10.0, "2023-10-01T10:00")).unwrap();

        let query = MetricQuery::new().on_date(day("2023-10-01"));
        let first = service.list_metrics(&query).unwrap();
        let second = service.list_metrics(&query).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_delete_metric_returns_count() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC001", "yield", 5.5, "2023-10-01T09:00")).unwrap();

        let as_of = AsOfTime::parse("2023-10-01T09:00").unwrap();
        assert_eq!(service.delete_metric("SEC001", "yield", as_of).unwrap(), 2);
        assert!(service.list_metrics(&MetricQuery::new()).unwrap().is_empty());
    }

    #[test]
    fn test_delete_absent_key_is_not_found() {
        let service = service();
        let as_of = AsOfTime::parse("2023-10-01T09:00").unwrap();
        let err = service.delete_metric("SEC001", "yield", as_of).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_largest_change_over_store() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC001", "yield", 7.0, "2023-10-02T09:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 10.0, "2023-10-01T09:00")).unwrap();
        service.add_metric(record("SEC002", "yield", 8.0, "2023-10-02T09:00")).unwrap();

        let report = service.largest_change("yield").unwrap();
        assert_eq!(report.security_id, "SEC001");
        assert_eq!(report.change, 2.0);
    }

    #[test]
    fn test_largest_change_unknown_metric_is_not_found() {
        let service = service();
        service.add_metric(record("SEC001", "yield", 5.0, "2023-10-01T09:00")).unwrap();

        let err = service.largest_change("Price").unwrap_err();
        assert!(err.is_not_found());
    }
}
