//! Calendar month keys
//!
//! A `MonthKey` names one calendar month and is written as `YYYY-MM`. Budgets
//! are declared per month and the monthly summary groups transactions by it.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Years accepted on incoming dates, so every month key stays four digits
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Check that a date's month can be written as a `YYYY-MM` key
    pub fn supports(date: NaiveDate) -> bool {
        SUPPORTED_YEARS.contains(&date.year())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the first day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    /// Get the last day of this month (inclusive)
    ///
    /// Saturates at `NaiveDate::MAX` for the last month chrono can represent.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Get the following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a `YYYY-MM` string
    ///
    /// The format is strict: four year digits, a dash, two month digits.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4
            || month_part.len() != 2
            || !year_part.chars().all(|c| c.is_ascii_digit())
            || !month_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl std::str::FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(jan.first_day(), date(2025, 1, 1));
        assert_eq!(jan.last_day(), date(2025, 1, 31));

        let feb_leap = MonthKey::new(2024, 2).unwrap();
        assert_eq!(feb_leap.last_day(), date(2024, 2, 29));

        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.last_day(), date(2024, 12, 31));
    }

    #[test]
    fn test_bounds_at_calendar_limits() {
        let last = MonthKey::from_date(NaiveDate::MAX);
        assert_eq!(last.first_day(), date(NaiveDate::MAX.year(), 12, 1));
        assert_eq!(last.last_day(), NaiveDate::MAX);

        let first = MonthKey::from_date(NaiveDate::MIN);
        assert_eq!(first.first_day(), NaiveDate::MIN);
        assert!(first.last_day() > first.first_day());

        let beyond = last.next();
        assert_eq!(beyond.first_day(), NaiveDate::MAX);
        assert_eq!(beyond.last_day(), NaiveDate::MAX);
    }

    #[test]
    fn test_supported_years() {
        assert!(MonthKey::supports(date(1, 1, 1)));
        assert!(MonthKey::supports(date(9999, 12, 31)));
        assert!(!MonthKey::supports(date(0, 6, 1)));
        assert!(!MonthKey::supports(date(10000, 1, 1)));
        assert!(!MonthKey::supports(NaiveDate::MAX));
    }

    #[test]
    fn test_navigation() {
        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthKey::new(2024, 12).unwrap());
        assert_eq!(jan.next(), MonthKey::new(2025, 2).unwrap());
        assert_eq!(MonthKey::new(2024, 12).unwrap().next(), jan);
    }

    #[test]
    fn test_contains() {
        let jan = MonthKey::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 15)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthKey::parse("2025-01").unwrap(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(MonthKey::parse("2025-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(MonthKey::parse("2025-1").is_err());
        assert!(MonthKey::parse("25-01").is_err());
        assert!(MonthKey::parse("2025/01").is_err());
        assert!(MonthKey::parse("2025-01-05").is_err());
        assert!(MonthKey::parse("").is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(MonthKey::new(2025, 3).unwrap().to_string(), "2025-03");
        assert_eq!(MonthKey::new(987, 11).unwrap().to_string(), "0987-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2025, 1).unwrap(),
            MonthKey::new(2024, 12).unwrap(),
            MonthKey::new(2024, 2).unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["2024-02", "2024-12", "2025-01"]);
    }

    #[test]
    fn test_serialization() {
        let key = MonthKey::new(2025, 1).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2025-01\"");
        let deserialized: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
        assert!(serde_json::from_str::<MonthKey>("\"2025-00\"").is_err());
    }
}
