//! Event listing commands.

use chrono::NaiveDate;
use clubevents_core::format::{format_event_details, format_event_line, format_month, format_when};
use clubevents_core::{
    Event, EventDirectory, MonthGrid, OutputFormat, RsvpAction, google_calendar_url,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::cli::YearMonth;
use crate::commands::{find_event, to_json};
use crate::content::Content;
use crate::error::{ClientError, ClientResult};

/// Renders a list of events, one per line, or `empty_text` when there are none.
pub fn render_events(
    events: &[&Event],
    format: OutputFormat,
    empty_text: &str,
) -> ClientResult<String> {
    match format {
        OutputFormat::Json => to_json(events),
        OutputFormat::Text if events.is_empty() => Ok(empty_text.to_string()),
        OutputFormat::Text => Ok(events
            .iter()
            .map(|event| format_event_line(event))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Every event starting on or after `today`.
pub fn upcoming(
    directory: &EventDirectory,
    today: NaiveDate,
    format: OutputFormat,
    empty_text: &str,
) -> ClientResult<String> {
    let events = directory.upcoming_events(today);
    debug!(%today, count = events.len(), "upcoming events");
    render_events(&events, format, empty_text)
}

/// The first `count` upcoming events.
pub fn next(
    directory: &EventDirectory,
    today: NaiveDate,
    count: usize,
    format: OutputFormat,
    empty_text: &str,
) -> ClientResult<String> {
    render_events(&directory.next_events(today, count), format, empty_text)
}

/// Events whose range covers `date`.
pub fn on(
    directory: &EventDirectory,
    date: NaiveDate,
    format: OutputFormat,
    empty_text: &str,
) -> ClientResult<String> {
    render_events(&directory.events_for_date(date), format, empty_text)
}

/// Type markers for `date`, one line per event.
pub fn dots(
    directory: &EventDirectory,
    date: NaiveDate,
    format: OutputFormat,
    empty_text: &str,
) -> ClientResult<String> {
    let dots = directory.event_dots(date);
    match format {
        OutputFormat::Json => to_json(&dots),
        OutputFormat::Text if dots.is_empty() => Ok(empty_text.to_string()),
        OutputFormat::Text => Ok(dots
            .iter()
            .map(|dot| {
                format!(
                    "{} {}: {}",
                    dot.kind.marker(),
                    dot.kind.display_name(),
                    dot.event.title
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// A month calendar with markers and an agenda of busy days.
pub fn month(
    directory: &EventDirectory,
    month: YearMonth,
    format: OutputFormat,
) -> ClientResult<String> {
    let grid = MonthGrid::build(directory, month.year, month.month).ok_or_else(|| {
        ClientError::InvalidArgument(format!("{} is not a calendar month", month))
    })?;

    match format {
        OutputFormat::Text => Ok(format_month(&grid)),
        OutputFormat::Json => {
            let days: Vec<_> = grid
                .busy_days()
                .map(|cell| {
                    let ids: Vec<&str> = cell.dots.iter().map(|d| d.event.id.as_str()).collect();
                    json!({ "date": cell.date, "types": cell.kinds(), "events": ids })
                })
                .collect();
            to_json(&json!({
                "title": grid.title(),
                "year": grid.year(),
                "month": grid.month(),
                "leadingBlanks": grid.leading_blanks(),
                "days": days,
            }))
        }
    }
}

/// Everything a visitor sees for one event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDetails<'a> {
    #[serde(flatten)]
    event: &'a Event,
    when: String,
    button_label: &'a str,
    rsvp: RsvpAction,
    google_calendar_url: String,
    ics_filename: String,
}

/// Full details of one event, including its RSVP action.
pub fn show(
    directory: &EventDirectory,
    id: &str,
    contact_email: &str,
    format: OutputFormat,
) -> ClientResult<String> {
    let event = find_event(directory, id)?;
    let rsvp = event.rsvp_action(contact_email);

    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}: {}",
            format_event_details(event),
            event.button_label(),
            rsvp.value()
        )),
        OutputFormat::Json => to_json(&EventDetails {
            event,
            when: format_when(event),
            button_label: event.button_label(),
            rsvp,
            google_calendar_url: google_calendar_url(event),
            ics_filename: event.ics_filename(),
        }),
    }
}

/// Summary of a content file that passed validation.
pub fn validate(content: &Content, today: NaiveDate, format: OutputFormat) -> ClientResult<String> {
    let events = content.directory.len();
    let upcoming = content.directory.upcoming_events(today).len();
    let gallery = content.gallery.len();
    let categories = content.gallery.categories();

    match format {
        OutputFormat::Json => to_json(&json!({
            "valid": true,
            "events": events,
            "upcoming": upcoming,
            "gallery": gallery,
            "categories": categories,
        })),
        OutputFormat::Text => Ok(format!(
            "Content is valid: {} events ({} upcoming), {} gallery items in {} categories.",
            events,
            upcoming,
            gallery,
            categories.len()
        )),
    }
}
