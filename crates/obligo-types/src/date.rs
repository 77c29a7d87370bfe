//! Calendar date decoded from a compact `YYYYMMDD` token.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing or decoding a [`CalendarDate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarDateError {
    /// Token is shorter than the 8 characters required by `YYYYMMDD`.
    #[error("Date token '{0}' is too short (expected at least 8 characters)")]
    TokenTooShort(String),

    /// A positional sub-slice of the token contains non-digit characters.
    #[error("Date token '{0}' contains a non-numeric {1} component")]
    NonNumericComponent(String, &'static str),

    /// Month outside 1-12.
    #[error("Month {0} out of range (expected 1-12)")]
    MonthOutOfRange(u32),

    /// Day outside 1-31.
    #[error("Day {0} out of range (expected 1-31)")]
    DayOutOfRange(u32),
}

/// A year/month/day triplet.
///
/// The components are structural: month is constrained to 1-12 and day to
/// 1-31, but full calendar validity (leap years, month lengths) is not
/// enforced. Use [`CalendarDate::to_naive_date`] when strict calendar
/// semantics are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Four-digit year.
    pub year: i32,
    /// Month of year (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl CalendarDate {
    /// Creates a new calendar date, validating the structural ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if month is outside 1-12 or day is outside 1-31.
    pub const fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarDateError> {
        if month < 1 || month > 12 {
            return Err(CalendarDateError::MonthOutOfRange(month));
        }
        if day < 1 || day > 31 {
            return Err(CalendarDateError::DayOutOfRange(day));
        }
        Ok(Self { year, month, day })
    }

    /// Decodes a fixed-position `YYYYMMDD` token.
    ///
    /// The token must be at least 8 characters: characters `[0,4)` are the
    /// year, `[4,6)` the month, and `[6,8)` the day. Each sub-slice must be
    /// ASCII digits. Characters past the eighth are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is too short, any component is
    /// non-numeric, or the decoded month/day is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligo_types::CalendarDate;
    ///
    /// let date = CalendarDate::from_compact("20310615").unwrap();
    /// assert_eq!(date.year, 2031);
    /// assert_eq!(date.month, 6);
    /// assert_eq!(date.day, 15);
    /// ```
    pub fn from_compact(token: &str) -> Result<Self, CalendarDateError> {
        let year = decode_component(token, 0..4, "year")?;
        let month = decode_component(token, 4..6, "month")?;
        let day = decode_component(token, 6..8, "day")?;

        Self::new(year as i32, month, day)
    }

    /// Converts to a chrono [`NaiveDate`], applying full calendar validation.
    ///
    /// Returns `None` for structurally valid but non-existent dates such as
    /// February 30th.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Extracts and parses one positional component of a compact date token.
fn decode_component(
    token: &str,
    range: std::ops::Range<usize>,
    name: &'static str,
) -> Result<u32, CalendarDateError> {
    let slice = token
        .get(range)
        .ok_or_else(|| CalendarDateError::TokenTooShort(token.to_string()))?;

    // u32::from_str accepts a leading `+`; the wire format is digits only.
    if !slice.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarDateError::NonNumericComponent(
            token.to_string(),
            name,
        ));
    }

    slice
        .parse()
        .map_err(|_| CalendarDateError::NonNumericComponent(token.to_string(), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_compact() {
        let date = CalendarDate::from_compact("20310615").unwrap();
        assert_eq!(date, CalendarDate::new(2031, 6, 15).unwrap());
    }

    #[test]
    fn test_from_compact_ignores_trailing_characters() {
        let date = CalendarDate::from_compact("20280101T00:00").unwrap();
        assert_eq!(date.year, 2028);
        assert_eq!(date.month, 1);
        assert_eq!(date.day, 1);
    }

    #[test]
    fn test_from_compact_too_short() {
        assert!(matches!(
            CalendarDate::from_compact("2031"),
            Err(CalendarDateError::TokenTooShort(_))
        ));
    }

    #[test]
    fn test_from_compact_non_numeric() {
        assert!(matches!(
            CalendarDate::from_compact("2031ab15"),
            Err(CalendarDateError::NonNumericComponent(_, "month"))
        ));
    }

    #[test]
    fn test_from_compact_rejects_signed_component() {
        assert!(matches!(
            CalendarDate::from_compact("+0310615"),
            Err(CalendarDateError::NonNumericComponent(_, "year"))
        ));
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(matches!(
            CalendarDate::from_compact("20311315"),
            Err(CalendarDateError::MonthOutOfRange(13))
        ));
    }

    #[test]
    fn test_day_out_of_range() {
        assert!(matches!(
            CalendarDate::new(2031, 6, 32),
            Err(CalendarDateError::DayOutOfRange(32))
        ));
    }

    #[test]
    fn test_display() {
        let date = CalendarDate::new(2031, 6, 5).unwrap();
        assert_eq!(date.to_string(), "2031-06-05");
    }

    #[test]
    fn test_to_naive_date() {
        let date = CalendarDate::new(2028, 2, 29).unwrap();
        assert!(date.to_naive_date().is_some());

        let invalid = CalendarDate::new(2029, 2, 29).unwrap();
        assert!(invalid.to_naive_date().is_none());
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let earlier = CalendarDate::new(2028, 1, 1).unwrap();
        let later = CalendarDate::new(2028, 1, 2).unwrap();
        assert!(earlier < later);
    }
}
