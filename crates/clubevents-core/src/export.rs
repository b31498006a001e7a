//! Calendar export links.
//!
//! Two outputs are produced for an [`Event`]:
//! - a Google Calendar "add event" deep link ([`google_calendar_url`])
//! - an inline iCalendar `data:` URI ([`ical_data_url`]) wrapping a minimal
//!   single-`VEVENT` document ([`ical_document`])
//!
//! Both always describe an all-day entry spanning the event's inclusive date
//! range. The free-text `time` field is not parsed.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use clubevents_core::{Event, EventType, export::google_calendar_url};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
//! let event = Event::new("tour", "Museum Tour", EventType::Civitan, date);
//! let url = google_calendar_url(&event);
//! assert!(url.contains("dates=20250605T000000/20250605T235900"));
//! ```

use chrono::NaiveDate;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};
use tracing::trace;

use crate::event::Event;
use crate::time::to_basic_format;

/// Base of the Google Calendar event template link.
pub const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// Default `PRODID` written into exported calendars.
pub const DEFAULT_PRODID: &str = "-//clubevents//Event Calendar//EN";

/// Prefix of the inline calendar download.
const ICAL_DATA_PREFIX: &str = "data:text/calendar;charset=utf8,";

/// Builds a Google Calendar template link for the event.
///
/// `dates` runs from the start of the first day to the end of the last day
/// (`YYYYMMDDT000000/YYYYMMDDT235900`). Title, description and location are
/// percent-encoded; description and location are omitted when absent or empty.
pub fn google_calendar_url(event: &Event) -> String {
    let mut url = format!(
        "{GOOGLE_CALENDAR_URL}?action=TEMPLATE&text={}&dates={}T000000/{}T235900",
        urlencoding::encode(&event.title),
        to_basic_format(event.start_date),
        to_basic_format(event.last_date()),
    );

    if let Some(description) = non_empty(&event.description) {
        url.push_str("&details=");
        url.push_str(&urlencoding::encode(description));
    }
    if let Some(location) = non_empty(&event.location) {
        url.push_str("&location=");
        url.push_str(&urlencoding::encode(location));
    }

    trace!(id = %event.id, url = %url, "built Google Calendar link");
    url
}

/// Builds the iCalendar document for a single event.
///
/// The entry is all-day: `DTSTART` is the first day and `DTEND` the day
/// after the last one, as RFC 5545 treats `DATE` end values as exclusive.
/// `DTSTAMP` is derived from the start date so the output depends only on
/// the event. Optional properties are left out entirely when absent.
pub fn ical_document(event: &Event, prodid: &str) -> String {
    let start = event.start_date;
    let last = event.last_date();
    let end_exclusive = last.succ_opt().unwrap_or(last);

    let mut vevent = icalendar::Event::new();
    vevent.uid(&format!("{}@clubevents", event.id));
    vevent.add_property("DTSTAMP", format!("{}T000000Z", to_basic_format(start)));
    vevent.append_property(all_day("DTSTART", start));
    vevent.append_property(all_day("DTEND", end_exclusive));
    vevent.summary(&unix_newlines(&event.title));
    if let Some(description) = non_empty(&event.description) {
        vevent.description(&unix_newlines(description));
    }
    if let Some(location) = non_empty(&event.location) {
        vevent.location(&unix_newlines(location));
    }

    let mut calendar = Calendar::new();
    calendar.push(vevent.done());
    let calendar = calendar.done();

    with_prodid(&calendar.to_string(), prodid)
}

/// Builds a `data:text/calendar` URI with the default `PRODID`.
pub fn ical_data_url(event: &Event) -> String {
    ical_data_url_with_prodid(event, DEFAULT_PRODID)
}

/// Builds a `data:text/calendar` URI with a custom `PRODID`.
pub fn ical_data_url_with_prodid(event: &Event, prodid: &str) -> String {
    let document = ical_document(event, prodid);
    format!("{ICAL_DATA_PREFIX}{}", urlencoding::encode(&document))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn all_day(name: &str, date: NaiveDate) -> Property {
    let mut property = Property::new(name, to_basic_format(date));
    property.append_parameter(ValueType::Date);
    property
}

/// CRLF and lone CR both become a single newline before escaping.
fn unix_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Swaps the builder's `PRODID` for ours and normalizes line endings.
fn with_prodid(ics: &str, prodid: &str) -> String {
    let prodid = prodid.replace(['\r', '\n'], "");
    let mut document = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            document.push_str("PRODID:");
            document.push_str(&prodid);
        } else {
            document.push_str(line);
        }
        document.push_str("\r\n");
    }
    document
}
