//! Calendar dates for club events.
//!
//! Events carry dates only, never a time of day or a time zone. This module
//! parses the authored `YYYY-MM-DD` strings into [`NaiveDate`] once, at load
//! time, and provides [`DateRange`] for the inclusive spans used by
//! multi-day events.
//!
//! Nothing here goes through a zone-aware type, so a date read as
//! `2025-06-05` is June 5th on every host.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::error::DateError;

/// Strict ISO calendar date: four-digit year, zero-padded month and day.
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("Invalid ISO date regex")
});

/// Parses a strict `YYYY-MM-DD` string into a [`NaiveDate`].
///
/// Unlike a general date parser this rejects unpadded components
/// (`2025-6-5`), surrounding whitespace and impossible days.
///
/// # Errors
///
/// Returns [`DateError::Malformed`] when the shape is wrong and
/// [`DateError::OutOfRange`] when the components name no real day.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateError> {
    let caps = ISO_DATE_REGEX
        .captures(value)
        .ok_or_else(|| DateError::Malformed(value.to_string()))?;

    let component = |i: usize| caps[i].parse::<u32>();
    let (Ok(year), Ok(month), Ok(day)) = (component(1), component(2), component(3)) else {
        return Err(DateError::Malformed(value.to_string()));
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DateError::OutOfRange(value.to_string()))
}

/// Formats a date as `YYYYMMDD`, the basic form used by calendar exports.
pub fn to_basic_format(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// An inclusive range of calendar days, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, or `None` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates a range covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` falls within the range, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns `true` if the range starts and ends on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Iterates over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod parsing {
        use super::*;

        #[test]
        fn accepts_strict_iso_dates() {
            assert_eq!(parse_iso_date("2025-06-05"), Ok(date(2025, 6, 5)));
            assert_eq!(parse_iso_date("2024-02-29"), Ok(date(2024, 2, 29)));
            assert_eq!(parse_iso_date("2025-12-31"), Ok(date(2025, 12, 31)));
        }

        #[test]
        fn rejects_wrong_shapes() {
            for input in [
                "",
                "2025-6-5",
                "2025/06/05",
                "06-05-2025",
                " 2025-06-05",
                "2025-06-05 ",
                "2025-06-05T00:00:00",
                "June 5, 2025",
            ] {
                assert_eq!(
                    parse_iso_date(input),
                    Err(DateError::Malformed(input.to_string())),
                    "input {input:?}"
                );
            }
        }

        #[test]
        fn rejects_impossible_days() {
            for input in ["2025-02-29", "2025-13-01", "2025-00-10", "2025-04-31"] {
                assert_eq!(
                    parse_iso_date(input),
                    Err(DateError::OutOfRange(input.to_string())),
                    "input {input:?}"
                );
            }
        }

        #[test]
        fn basic_format() {
            assert_eq!(to_basic_format(date(2025, 6, 5)), "20250605");
            assert_eq!(to_basic_format(date(2025, 12, 31)), "20251231");
        }
    }

    mod date_range {
        use super::*;

        #[test]
        fn rejects_reversed_bounds() {
            assert!(DateRange::new(date(2025, 8, 9), date(2025, 8, 6)).is_none());
        }

        #[test]
        fn contains_is_inclusive() {
            let range = DateRange::new(date(2025, 8, 6), date(2025, 8, 9)).unwrap();

            assert!(!range.contains(date(2025, 8, 5)));
            assert!(range.contains(date(2025, 8, 6)));
            assert!(range.contains(date(2025, 8, 7)));
            assert!(range.contains(date(2025, 8, 8)));
            assert!(range.contains(date(2025, 8, 9)));
            assert!(!range.contains(date(2025, 8, 10)));
        }

        #[test]
        fn single_day() {
            let range = DateRange::single(date(2025, 6, 5));
            assert!(range.is_single_day());
            assert!(range.contains(date(2025, 6, 5)));
            assert!(!range.contains(date(2025, 6, 4)));
            assert_eq!(range, DateRange::new(date(2025, 6, 5), date(2025, 6, 5)).unwrap());
        }

        #[test]
        fn days_crosses_month_boundary() {
            let range = DateRange::new(date(2025, 8, 30), date(2025, 9, 2)).unwrap();
            let days: Vec<_> = range.days().collect();
            assert_eq!(
                days,
                vec![
                    date(2025, 8, 30),
                    date(2025, 8, 31),
                    date(2025, 9, 1),
                    date(2025, 9, 2)
                ]
            );
            assert_eq!(range.days().count(), 4);
        }

        #[test]
        fn serializes_bounds() {
            let range = DateRange::new(date(2025, 8, 6), date(2025, 8, 9)).unwrap();
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, r#"{"start":"2025-08-06","end":"2025-08-09"}"#);
        }
    }
}
