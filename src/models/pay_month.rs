//! Pay month model.
//!
//! A salary record belongs to one calendar month, written `YYYY-MM`. The
//! month is a record attribute only and never enters the arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A year-month identifier such as `2024-05`.
///
/// Ordering is chronological.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
///
/// let month: PayMonth = "2024-05".parse().unwrap();
/// assert_eq!(month.year(), 2024);
/// assert_eq!(month.month(), 5);
/// assert_eq!(month.to_string(), "2024-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    /// Creates a pay month, returning `None` for an impossible month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|date| Self {
            year: date.year(),
            month: date.month(),
        })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl FromStr for PayMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .map_err(|_| invalid())?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl TryFrom<String> for PayMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayMonth> for String {
    fn from(month: PayMonth) -> Self {
        month.to_string()
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_month() {
        let month: PayMonth = "2024-05".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 5);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let month: PayMonth = " 2024-12 ".parse().unwrap();
        assert_eq!(month.to_string(), "2024-12");
    }

    #[test]
    fn test_parse_rejects_month_13() {
        let result: Result<PayMonth, _> = "2024-13".parse();
        match result {
            Err(EngineError::InvalidMonth { value }) => assert_eq!(value, "2024-13"),
            other => panic!("Expected InvalidMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_loose_formats() {
        for value in ["2024-5", "24-05", "2024/05", "", "May 2024", "2024-05-01"] {
            assert!(value.parse::<PayMonth>().is_err(), "accepted {:?}", value);
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = PayMonth::new(2023, 12).unwrap();
        let later = PayMonth::new(2024, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_new_rejects_month_zero() {
        assert!(PayMonth::new(2024, 0).is_none());
    }

    #[test]
    fn test_serializes_as_string() {
        let month = PayMonth::new(2024, 3).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-03\"");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<PayMonth, _> = serde_json::from_str("\"2024-00\"");
        assert!(result.is_err());
    }
}
