//! Calendar month key
//!
//! `YearMonth` is the grouping key for monthly buckets. Its ordering compares
//! the year first and then the month, so sorting is always chronological:
//! 2019-12 comes before 2023-01 no matter how the keys were produced.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (year, month) pair
///
/// Field order matters: the derived `Ord` compares `year` before `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month key, returning `None` when `month` is not in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let jan = ym(2025, 1);
        assert_eq!(jan.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let date = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
        assert_eq!(YearMonth::from_date(date), ym(2019, 12));
    }

    #[test]
    fn test_invalid_month() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
    }

    #[test]
    fn test_chronological_ordering() {
        // "2019-12" must come before "2023-01", and "2019-10" before "2020-01"
        assert!(ym(2019, 12) < ym(2023, 1));
        assert!(ym(2019, 10) < ym(2020, 1));
        assert!(ym(2020, 2) < ym(2020, 10));

        let mut months = vec![ym(2023, 1), ym(2019, 12), ym(2021, 6), ym(2019, 2)];
        months.sort();
        assert_eq!(months, vec![ym(2019, 2), ym(2019, 12), ym(2021, 6), ym(2023, 1)]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(YearMonth::parse("2025-01").unwrap(), ym(2025, 1));
        assert_eq!(YearMonth::parse("2019-12").unwrap(), ym(2019, 12));
        assert_eq!(YearMonth::parse("2025-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(matches!(
            YearMonth::parse("January"),
            Err(MonthParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2025, 1).to_string(), "2025-01");
        assert_eq!(ym(987, 11).to_string(), "0987-11");
    }
}
