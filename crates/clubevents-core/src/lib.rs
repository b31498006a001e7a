//! Core types: club events, directory queries, calendar export, gallery filters
//!
//! The [`EventDirectory`] is the static list of club events, validated when it
//! is built. Every query takes the reference date explicitly:
//!
//! ```
//! use chrono::NaiveDate;
//! use clubevents_core::{Event, EventDirectory, EventType};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
//! let directory = EventDirectory::new(vec![
//!     Event::new("meeting", "Monthly Meeting", EventType::Civitan, day(5)),
//!     Event::new("flag-day", "Flag Day", EventType::National, day(14)),
//! ])
//! .unwrap();
//!
//! let next = directory.next_events(day(1), 1);
//! assert_eq!(next[0].id, "meeting");
//! ```

pub mod calendar;
pub mod directory;
pub mod error;
pub mod event;
pub mod export;
pub mod format;
pub mod gallery;
pub mod rsvp;
pub mod time;
pub mod tracing;

pub use calendar::{DayCell, MonthGrid};
pub use directory::EventDirectory;
pub use error::{DateError, DirectoryError, GalleryError};
pub use event::{Event, EventDot, EventRecord, EventType};
pub use export::{google_calendar_url, ical_data_url, ical_document};
pub use format::{OutputFormat, format_date, format_date_span, format_event_date};
pub use gallery::{Gallery, GalleryFilter, GalleryItem, GalleryRecord};
pub use rsvp::RsvpAction;
pub use time::{DateRange, parse_iso_date};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
