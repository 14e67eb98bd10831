//! Daily snapshot resolution.
//!
//! A snapshot answers "what was the latest known value of each metric for
//! each security on a given calendar day". Only records observed on that day
//! participate; the day is a filter, not a cutoff, so history from earlier
//! days never bleeds in.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use metrica_core::MetricRecord;

/// Resolves the snapshot of metric values for one calendar day.
///
/// Keeps the records observed on `date`, then retains the latest observation
/// per `(security_id, metric_name)` pair. The sort is stable, so among
/// observations sharing the same minute the one appearing later in stored
/// order wins.
///
/// # Arguments
///
/// * `records` - Record sequence in stored order
/// * `date` - Calendar day to resolve
///
/// # Returns
///
/// The retained records, one per pair, ordered by security id then metric
/// name. A day with no observations resolves to an empty vector.
#[must_use]
pub fn daily_snapshot(records: &[MetricRecord], date: NaiveDate) -> Vec<MetricRecord> {
    let mut day_records: Vec<&MetricRecord> = records
        .iter()
        .filter(|record| record.as_of.date() == date)
        .collect();
    day_records.sort_by_key(|record| record.as_of);

    let mut latest: BTreeMap<(&str, &str), &MetricRecord> = BTreeMap::new();
    for record in day_records {
        latest.insert(
            (record.security_id.as_str(), record.metric_name.as_str()),
            record,
        );
    }

    latest.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrica_core::AsOfTime;

    fn record(security_id: &str, metric_name: &str, value: f64, as_of: &str) -> MetricRecord {
        MetricRecord::new(security_id, metric_name, value, AsOfTime::parse(as_of).unwrap())
    }

    fn day(input: &str) -> NaiveDate {
        input.parse().unwrap()
    }

    #[test]
    fn test_latest_observation_per_pair_wins() {
        let records = vec![
            record("SEC001", "yield", 5.0, "2023-10-01T09:00"),
            record("SEC001", "yield", 7.0, "2023-10-01T16:00"),
            record("SEC002", "yield", 10.0, "2023-10-01T10:00"),
        ];

        let snapshot = daily_snapshot(&records, day("2023-10-01"));
        assert_eq!(snapshot.len(), 2);

        assert_eq!(snapshot[0].security_id, "SEC001");
        assert_eq!(snapshot[0].metric_value, 7.0);
        assert_eq!(snapshot[0].as_of.to_string(), "10/01/2023 16:00");

        assert_eq!(snapshot[1].security_id, "SEC002");
        assert_eq!(snapshot[1].metric_value, 10.0);
        assert_eq!(snapshot[1].as_of.to_string(), "10/01/2023 10:00");
    }

    #[test]
    fn test_latest_wins_regardless_of_stored_order() {
        let records = vec![
            record("SEC001", "yield", 7.0, "2023-10-01T16:00"),
            record("SEC001", "yield", 5.0, "2023-10-01T09:00"),
        ];

        let snapshot = daily_snapshot(&records, day("2023-10-01"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].metric_value, 7.0);
    }

    #[test]
    fn test_other_days_are_excluded_not_cut_off() {
        // The day is a filter: a value from the prior day does not carry
        // forward into the queried day's snapshot.
        let records = vec![
            record("SEC001", "yield", 5.0, "2023-09-30T16:00"),
            record("SEC002", "yield", 10.0, "2023-10-01T10:00"),
            record("SEC003", "yield", 3.0, "2023-10-02T09:00"),
        ];

        let snapshot = daily_snapshot(&records, day("2023-10-01"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].security_id, "SEC002");
    }

    #[test]
    fn test_no_observations_resolves_empty() {
        let records = vec![record("SEC001", "yield", 5.0, "2023-10-01T09:00")];
        assert!(daily_snapshot(&records, day("2023-10-02")).is_empty());
        assert!(daily_snapshot(&[], day("2023-10-01")).is_empty());
    }

    #[test]
    fn test_metrics_resolve_independently_per_security() {
        let records = vec![
            record("SEC001", "price", 101.25, "2023-10-01T09:00"),
            record("SEC001", "yield", 5.0, "2023-10-01T10:00"),
            record("SEC001", "price", 101.5, "2023-10-01T15:00"),
        ];

        let snapshot = daily_snapshot(&records, day("2023-10-01"));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].metric_name, "price");
        assert_eq!(snapshot[0].metric_value, 101.5);
        assert_eq!(snapshot[1].metric_name, "yield");
        assert_eq!(snapshot[1].metric_value, 5.0);
    }

    #[test]
    fn test_same_minute_keeps_later_stored_entry() {
        let records = vec![
            record("SEC001", "yield", 5.0, "2023-10-01T09:00"),
            record("SEC001", "yield", 6.0, "2023-10-01T09:00"),
        ];

        let snapshot = daily_snapshot(&records, day("2023-10-01"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].metric_value, 6.0);
    }

    #[test]
    fn test_rows_ordered_by_security_then_metric() {
        let records = vec![
            record("SEC002", "yield", 1.0, "2023-10-01T09:00"),
            record("SEC001", "yield", 2.0, "2023-10-01T09:00"),
            record("SEC001", "price", 3.0, "2023-10-01T09:00"),
        ];

        let snapshot = daily_snapshot(&records, day("2023-10-01"));
        let keys: Vec<(&str, &str)> = snapshot
            .iter()
            .map(|r| (r.security_id.as_str(), r.metric_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("SEC001", "price"), ("SEC001", "yield"), ("SEC002", "yield")]
        );
    }
}
