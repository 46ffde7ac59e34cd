//! Calendar month used for monthly grouping
//!
//! A `YearMonth` is derived from a record's timestamp and is the key the
//! monthly summary filters on.

use chrono::{Datelike, Month, NaiveDateTime};
use std::fmt;

use crate::error::TrackerError;

/// A calendar month of a specific year (e.g. May 2025)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year/month pair, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, TrackerError> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given timestamp
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    /// Get the current month in local time
    pub fn current() -> Self {
        Self::from_datetime(&chrono::Local::now().naive_local())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// English month name ("May")
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_bounds() {
        assert!(YearMonth::new(2025, 1).is_ok());
        assert!(YearMonth::new(2025, 12).is_ok());
        assert!(YearMonth::new(2025, 0).unwrap_err().is_validation());
        assert!(YearMonth::new(2025, 13).is_err());
    }

    #[test]
    fn test_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2025, 5, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(YearMonth::from_datetime(&dt), YearMonth::new(2025, 5).unwrap());
    }

    #[test]
    fn test_display_and_name() {
        let ym = YearMonth::new(2025, 5).unwrap();
        assert_eq!(ym.to_string(), "2025-05");
        assert_eq!(ym.month_name(), "May");
    }
}
