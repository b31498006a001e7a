//! Text formatting for event dates and listings.
//!
//! This module provides:
//! - [`format_event_date`]: the long US English form of an ISO date ("June 5, 2025")
//! - [`format_date_span`]: the same for an inclusive range ("August 6-9, 2025")
//! - line, detail and month renderers used by the command-line front end
//!
//! Dates are rendered from their year/month/day components directly. No
//! value here is ever converted through a time zone, so the day printed is
//! the day authored on every host.
//!
//! # Example
//!
//! ```rust
//! use clubevents_core::format::format_event_date;
//!
//! assert_eq!(format_event_date("2025-06-05").unwrap(), "June 5, 2025");
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{DayCell, MonthGrid};
use crate::error::DateError;
use crate::event::Event;
use crate::time::{DateRange, parse_iso_date};

/// The output format for command-line listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Formats an ISO `YYYY-MM-DD` string as "June 5, 2025".
///
/// # Errors
///
/// Returns a [`DateError`] if the string is not a strict ISO calendar date.
pub fn format_event_date(iso: &str) -> Result<String, DateError> {
    parse_iso_date(iso).map(format_date)
}

/// Formats a date as "June 5, 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats an inclusive range, collapsing shared month and year.
///
/// - single day: "June 5, 2025"
/// - same month: "August 6-9, 2025"
/// - same year: "August 30 - September 2, 2025"
/// - otherwise: "December 30, 2025 - January 2, 2026"
pub fn format_date_span(range: DateRange) -> String {
    let (start, end) = (range.start(), range.end());
    if range.is_single_day() {
        format_date(start)
    } else if start.year() == end.year() && start.month() == end.month() {
        format!("{}-{}, {}", start.format("%B %-d"), end.day(), end.year())
    } else if start.year() == end.year() {
        format!(
            "{} - {}, {}",
            start.format("%B %-d"),
            end.format("%B %-d"),
            end.year()
        )
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

/// Formats when an event happens, including its free-text time if any.
pub fn format_when(event: &Event) -> String {
    let span = format_date_span(event.date_range());
    match event.time.as_deref() {
        Some(time) => format!("{span} at {time}"),
        None => span,
    }
}

/// Describes a cancellation entry, e.g. "No meeting. Next meeting: June 12, 2025."
pub fn format_cancellation(event: &Event) -> String {
    match event.next_meeting_date {
        Some(next) => format!("No meeting. Next meeting: {}.", format_date(next)),
        None => "No meeting.".to_string(),
    }
}

/// One-line summary: "June 5, 2025 [civitan] Title".
pub fn format_event_line(event: &Event) -> String {
    let mut line = format!("{} [{}] {}", format_when(event), event.kind.as_str(), event.title);
    if event.is_no_meeting {
        line.push_str(" (no meeting)");
    }
    line
}

/// Multi-line detail block for a single event.
pub fn format_event_details(event: &Event) -> String {
    let mut lines = vec![event.title.clone(), format!("When: {}", format_when(event))];

    if let Some(ref location) = event.location {
        lines.push(format!("Where: {location}"));
    }
    lines.push(format!("Type: {}", event.kind.display_name()));
    if event.is_no_meeting {
        lines.push(format!("Status: {}", format_cancellation(event)));
    }
    if let Some(ref description) = event.description {
        lines.push(format!("About: {description}"));
    }
    if let Some(ref url) = event.google_maps_url {
        lines.push(format!("Map: {url}"));
    }
    if let Some(ref url) = event.external_url {
        lines.push(format!("Link: {url}"));
    }

    lines.join("\n")
}

/// Marker for a calendar cell: the type marker, `+` for mixed types, or blank.
fn cell_marker(cell: &DayCell<'_>) -> char {
    match cell.kinds().as_slice() {
        [] => ' ',
        [only] => only.marker(),
        _ => '+',
    }
}

/// Renders a month as a Sunday-first text calendar followed by an agenda.
///
/// Each day cell is the day number followed by a type marker (`C`, `N`,
/// `I`, or `+` when types are mixed).
pub fn format_month(grid: &MonthGrid<'_>) -> String {
    let mut lines = vec![grid.title()];

    let header: Vec<String> = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|d| format!("{d} "))
        .collect();
    lines.push(header.join(" ").trim_end().to_string());

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => format!("{:>2}{}", cell.date.day(), cell_marker(cell)),
                None => "   ".to_string(),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    let agenda: Vec<String> = grid
        .busy_days()
        .flat_map(|cell| {
            cell.dots.iter().map(move |dot| {
                format!(
                    "{} {} {}",
                    cell.date.format("%b %-d"),
                    dot.kind.marker(),
                    dot.event.title
                )
            })
        })
        .collect();

    if !agenda.is_empty() {
        lines.push(String::new());
        lines.extend(agenda);
    }

    lines.join("\n")
}

#[cfg(test)]
mod golden_tests;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod event_date {
        use super::*;

        #[test]
        fn keeps_the_authored_day() {
            let formatted = format_event_date("2025-06-05").unwrap();
            assert_eq!(formatted, "June 5, 2025");
            assert!(formatted.contains(" 5,"));
        }

        #[test]
        fn first_and_last_days_of_year() {
            assert_eq!(format_event_date("2025-01-01").unwrap(), "January 1, 2025");
            assert_eq!(format_event_date("2025-12-31").unwrap(), "December 31, 2025");
        }

        #[test]
        fn rejects_malformed_input() {
            assert!(format_event_date("06/05/2025").is_err());
            assert!(format_event_date("2025-02-30").is_err());
        }
    }

    mod date_span {
        use super::*;

        #[test]
        fn single_day() {
            assert_eq!(format_date_span(DateRange::single(date(2025, 6, 5))), "June 5, 2025");
        }

        #[test]
        fn same_month() {
            let range = DateRange::new(date(2025, 8, 6), date(2025, 8, 9)).unwrap();
            assert_eq!(format_date_span(range), "August 6-9, 2025");
        }

        #[test]
        fn across_months() {
            let range = DateRange::new(date(2025, 8, 30), date(2025, 9, 2)).unwrap();
            assert_eq!(format_date_span(range), "August 30 - September 2, 2025");
        }

        #[test]
        fn across_years() {
            let range = DateRange::new(date(2025, 12, 30), date(2026, 1, 2)).unwrap();
            assert_eq!(
                format_date_span(range),
                "December 30, 2025 - January 2, 2026"
            );
        }
    }

    #[test]
    fn cancellation_text() {
        let event = Event::new("off", "No Meeting", EventType::National, date(2025, 7, 3))
            .with_no_meeting(Some(date(2025, 7, 10)));
        assert_eq!(format_cancellation(&event), "No meeting. Next meeting: July 10, 2025.");

        let event = Event::new("off", "No Meeting", EventType::National, date(2025, 7, 3))
            .with_no_meeting(None);
        assert_eq!(format_cancellation(&event), "No meeting.");
    }

    #[test]
    fn line_includes_time_and_type() {
        let event = Event::new("m", "Monthly Meeting", EventType::Civitan, date(2025, 6, 5))
            .with_time("11:45 AM");
        assert_eq!(
            format_event_line(&event),
            "June 5, 2025 at 11:45 AM [civitan] Monthly Meeting"
        );
    }
}
