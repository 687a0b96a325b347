//! Financial year types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for financial year parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FiscalError {
    /// Label does not match the `YYYY-YYYY` shape.
    #[error("Financial year must look like \"2025-2026\", got {0:?}")]
    MalformedLabel(String),

    /// The two years are not consecutive.
    #[error("Financial year must span consecutive years, got {0:?}")]
    NonConsecutiveYears(String),

    /// Start year falls outside the supported range.
    #[error("Financial year {0} is out of the supported range")]
    YearOutOfRange(i32),
}

/// A government financial year, running 1 April to 31 March.
///
/// Identified by its label (e.g. "2025-2026"); every other entity in the
/// system is scoped to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear {
    start_year: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl FinancialYear {
    /// Creates a financial year starting 1 April of the given year.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::YearOutOfRange` for years outside 1900-2100.
    pub fn from_start_year(start_year: i32) -> Result<Self, FiscalError> {
        if !(1900..=2100).contains(&start_year) {
            return Err(FiscalError::YearOutOfRange(start_year));
        }
        let start_date = NaiveDate::from_ymd_opt(start_year, 4, 1)
            .ok_or(FiscalError::YearOutOfRange(start_year))?;
        let end_date = NaiveDate::from_ymd_opt(start_year + 1, 3, 31)
            .ok_or(FiscalError::YearOutOfRange(start_year))?;
        Ok(Self {
            start_year,
            start_date,
            end_date,
        })
    }

    /// The year the financial year starts in.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// First day of the financial year (1 April).
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the financial year (31 March).
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns true if the given date falls within this financial year.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The label as displayed, e.g. "2025-2026".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.start_year, self.start_year + 1)
    }

    /// The following financial year.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::YearOutOfRange` at the end of the supported range.
    pub fn next(&self) -> Result<Self, FiscalError> {
        Self::from_start_year(self.start_year + 1)
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_year, self.start_year + 1)
    }
}

impl std::str::FromStr for FinancialYear {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| FiscalError::MalformedLabel(s.to_string()))?;
        let start: i32 = start
            .trim()
            .parse()
            .map_err(|_| FiscalError::MalformedLabel(s.to_string()))?;
        let end: i32 = end
            .trim()
            .parse()
            .map_err(|_| FiscalError::MalformedLabel(s.to_string()))?;
        if end != start + 1 {
            return Err(FiscalError::NonConsecutiveYears(s.to_string()));
        }
        Self::from_start_year(start)
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = FiscalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(year: FinancialYear) -> Self {
        year.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_label() {
        let year: FinancialYear = "2025-2026".parse().unwrap();
        assert_eq!(year.start_year(), 2025);
        assert_eq!(year.label(), "2025-2026");
    }

    #[rstest]
    #[case("2025")]
    #[case("abcd-efgh")]
    #[case("2025/2026")]
    #[case("")]
    fn test_malformed_labels_rejected(#[case] label: &str) {
        assert!(matches!(
            label.parse::<FinancialYear>(),
            Err(FiscalError::MalformedLabel(_))
        ));
    }

    #[test]
    fn test_non_consecutive_years_rejected() {
        assert_eq!(
            "2025-2027".parse::<FinancialYear>(),
            Err(FiscalError::NonConsecutiveYears("2025-2027".to_string()))
        );
    }

    #[test]
    fn test_date_range() {
        let year: FinancialYear = "2025-2026".parse().unwrap();
        assert_eq!(year.start_date(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(year.end_date(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        assert!(year.contains_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
        assert!(!year.contains_date(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }

    #[test]
    fn test_next_year() {
        let year: FinancialYear = "2025-2026".parse().unwrap();
        assert_eq!(year.next().unwrap().label(), "2026-2027");
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            FinancialYear::from_start_year(1850),
            Err(FiscalError::YearOutOfRange(1850))
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let year: FinancialYear = "2025-2026".parse().unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "\"2025-2026\"");
        let back: FinancialYear = serde_json::from_str(&json).unwrap();
        assert_eq!(back, year);
    }
}
