//! Time-range bounds attached to colocated data.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GcosError, GcosResult};

/// Parse an ISO 8601 time bound.
///
/// Accepts RFC 3339, a naive `%Y-%m-%dT%H:%M:%S` datetime (assumed UTC), or a
/// plain `%Y-%m-%d` date (midnight UTC).
pub fn parse_iso8601(s: &str) -> GcosResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    Err(GcosError::invalid_time(format!("cannot parse '{}'", s)))
}

/// Closed time interval covered by a colocated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a range; `start` must not be after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> GcosResult<Self> {
        if start > end {
            return Err(GcosError::invalid_time(format!(
                "start {} is after end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from ISO 8601 strings.
    pub fn parse(start: &str, end: &str) -> GcosResult<Self> {
        Self::new(parse_iso8601(start)?, parse_iso8601(end)?)
    }

    /// Build a range from optional bounds: both or neither must be given.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> GcosResult<Option<Self>> {
        match (start, end) {
            (Some(start), Some(end)) => Self::parse(start, end).map(Some),
            (None, None) => Ok(None),
            (Some(_), None) => Err(GcosError::invalid_time("start given without stop")),
            (None, Some(_)) => Err(GcosError::invalid_time("stop given without start")),
        }
    }

    /// Start bound as `YYYY-MM-DD`.
    pub fn start_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End bound as `YYYY-MM-DD`.
    pub fn end_date(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
