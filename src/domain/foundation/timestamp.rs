//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the calendar year and month (1-12) of this instant.
    pub fn year_month(&self) -> (i32, u32) {
        (self.0.year(), self.0.month())
    }

    /// Returns the `YYYY-MM` bucket key used by monthly series.
    pub fn month_key(&self) -> String {
        format!("{}-{:02}", self.0.year(), self.0.month())
    }

    /// Returns the `YYYY/MM/DD` date string used in rank change views.
    pub fn format_date(&self) -> String {
        self.0.format("%Y/%m/%d").to_string()
    }

    /// Creates a new timestamp the given number of calendar months
    /// earlier, clamping the day to the target month's length.
    pub fn months_back(&self, months: u32) -> Self {
        let mut year = self.0.year();
        let mut month = self.0.month() as i32 - months as i32;
        while month < 1 {
            month += 12;
            year -= 1;
        }
        let month = month as u32;
        let day = self.0.day().min(days_in_month(year, month));
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self(date.and_time(self.0.time()).and_utc()),
            None => *self,
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn ts(s: &str) -> Timestamp {
        let dt = DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let stamp = Timestamp::now();
        let after = Utc::now();

        assert!(stamp.as_datetime() >= &before);
        assert!(stamp.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_is_before_and_after_work() {
        let ts1 = Timestamp::now();
        sleep(Duration::from_millis(10));
        let ts2 = Timestamp::now();

        assert!(ts1.is_before(&ts2));
        assert!(ts2.is_after(&ts1));
        assert!(!ts2.is_before(&ts1));
    }

    #[test]
    fn year_month_extracts_calendar_parts() {
        assert_eq!(ts("2024-03-15T10:30:00Z").year_month(), (2024, 3));
        assert_eq!(ts("2023-12-01T00:00:00Z").year_month(), (2023, 12));
    }

    #[test]
    fn month_key_pads_single_digit_months() {
        assert_eq!(ts("2024-03-15T10:30:00Z").month_key(), "2024-03");
        assert_eq!(ts("2024-11-15T10:30:00Z").month_key(), "2024-11");
    }

    #[test]
    fn format_date_uses_slash_separators() {
        assert_eq!(ts("2024-03-05T10:30:00Z").format_date(), "2024/03/05");
    }

    #[test]
    fn months_back_crosses_year_boundary() {
        let stamp = ts("2024-01-15T10:30:00Z").months_back(2);
        assert_eq!(stamp.year_month(), (2023, 11));
        assert_eq!(stamp.as_datetime().day(), 15);
    }

    #[test]
    fn months_back_clamps_to_month_length() {
        let stamp = ts("2024-03-31T10:30:00Z").months_back(1);
        assert_eq!(stamp.year_month(), (2024, 2));
        // 2024 is a leap year
        assert_eq!(stamp.as_datetime().day(), 29);
    }

    #[test]
    fn months_back_zero_is_identity() {
        let stamp = ts("2024-03-15T10:30:00Z");
        assert_eq!(stamp.months_back(0), stamp);
    }

    #[test]
    fn timestamp_serializes_to_rfc3339() {
        let stamp = ts("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&stamp).unwrap();
        assert!(json.contains("2024-01-15"));

        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stamp);
    }
}
