//! Observation timestamp type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{MetricError, MetricResult};

/// Fixed presentation pattern for observation timestamps.
const DISPLAY_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Accepted input shapes, tried in order. RFC 3339 strings with an explicit
/// offset are handled separately before this list.
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// The timestamp at which a metric was observed.
///
/// This is a newtype wrapper around `chrono::NaiveDateTime` that enforces the
/// store's timestamp conventions: minute precision (anything finer is
/// truncated on construction) and a fixed `MM/DD/YYYY HH:MM` presentation
/// pattern regardless of the shape the input arrived in.
///
/// Ordering and equality compare the underlying instant, so two timestamps
/// written in different input shapes compare equal once parsed.
///
/// # Example
///
/// ```rust
/// use metrica_core::AsOfTime;
///
/// let t = AsOfTime::parse("2023-10-01T16:00").unwrap();
/// assert_eq!(t.to_string(), "10/01/2023 16:00");
/// assert_eq!(t.date().to_string(), "2023-10-01");
///
/// // The canonical presentation shape round-trips.
/// assert_eq!(AsOfTime::parse("10/01/2023 16:00").unwrap(), t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsOfTime(NaiveDateTime);

impl AsOfTime {
    /// Creates a timestamp from an instant, truncating to minute precision.
    #[must_use]
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(truncate_to_minute(instant))
    }

    /// Creates a timestamp from calendar and clock components.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::InvalidTimestamp` if a component is out of range.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> MetricResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .map(Self)
            .ok_or_else(|| {
                MetricError::invalid_timestamp(
                    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"),
                    "out-of-range component",
                )
            })
    }

    /// Parses a timestamp from text.
    ///
    /// Accepts ISO-8601 shapes (`2023-10-01T16:00`, with or without seconds,
    /// space-separated, or a bare date meaning midnight), RFC 3339 strings
    /// with an offset, and the canonical `MM/DD/YYYY HH:MM` presentation
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::MissingField` for empty input and
    /// `MetricError::InvalidTimestamp` for anything unparseable.
    pub fn parse(input: &str) -> MetricResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MetricError::missing_field("AsOfDateTime"));
        }

        // Offsets are dropped, not converted: an observation stamped
        // 09:00+05:00 was observed at 09:00 on the local clock.
        if let Ok(aware) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::new(aware.naive_local()));
        }

        for format in PARSE_FORMATS {
            if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self::new(instant));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(midnight));
            }
        }

        Err(MetricError::invalid_timestamp(
            trimmed,
            "unrecognized timestamp format",
        ))
    }

    /// Returns the calendar-date component.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the underlying instant.
    #[must_use]
    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }
}

fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

impl fmt::Display for AsOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for AsOfTime {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for AsOfTime {
    fn from(instant: NaiveDateTime) -> Self {
        Self::new(instant)
    }
}

impl Serialize for AsOfTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AsOfTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_minute() {
        let t = AsOfTime::parse("2023-10-01T09:00").unwrap();
        assert_eq!(t.to_string(), "10/01/2023 09:00");
    }

    #[test]
    fn test_parse_iso_with_seconds_truncates() {
        let t = AsOfTime::parse("2023-10-01T09:00:45").unwrap();
        assert_eq!(t, AsOfTime::parse("2023-10-01T09:00").unwrap());
    }

    #[test]
    fn test_parse_space_separated() {
        let t = AsOfTime::parse("2023-10-01 16:30:00").unwrap();
        assert_eq!(t.to_string(), "10/01/2023 16:30");
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let t = AsOfTime::parse("2023-10-01").unwrap();
        assert_eq!(t.to_string(), "10/01/2023 00:00");
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        let t = AsOfTime::parse("2023-10-01T09:00:00+05:00").unwrap();
        assert_eq!(t.to_string(), "10/01/2023 09:00");

        let z = AsOfTime::parse("2023-10-01T09:00:00Z").unwrap();
        assert_eq!(z, t);
    }

    #[test]
    fn test_canonical_shape_round_trips() {
        let rendered = AsOfTime::parse("2023-10-01T16:00").unwrap().to_string();
        let reparsed = AsOfTime::parse(&rendered).unwrap();
        assert_eq!(reparsed.to_string(), rendered);
    }

    #[test]
    fn test_parse_empty_is_missing_field() {
        let err = AsOfTime::parse("  ").unwrap_err();
        assert_eq!(err, MetricError::missing_field("AsOfDateTime"));
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        let err = AsOfTime::parse("not-a-timestamp").unwrap_err();
        assert!(matches!(err, MetricError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_from_ymd_hm_rejects_bad_components() {
        assert!(AsOfTime::from_ymd_hm(2023, 2, 30, 9, 0).is_err());
        assert!(AsOfTime::from_ymd_hm(2023, 10, 1, 24, 0).is_err());
    }

    #[test]
    fn test_ordering_on_instant() {
        let early = AsOfTime::parse("2023-10-01T09:00").unwrap();
        let late = AsOfTime::parse("2023-10-01T16:00").unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_serde_uses_display_shape() {
        let t = AsOfTime::parse("2023-10-01T16:00").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"10/01/2023 16:00\"");

        let back: AsOfTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
