//! Calendar export and RSVP commands.

use std::path::Path;

use clubevents_core::export::{ical_data_url_with_prodid, ical_document};
use clubevents_core::{EventDirectory, OutputFormat, RsvpAction, google_calendar_url};
use serde_json::json;
use tracing::info;

use crate::actions;
use crate::commands::{find_event, to_json};
use crate::error::ClientResult;

/// The Google Calendar link for an event, optionally opened or copied.
pub fn google(directory: &EventDirectory, id: &str, open: bool, copy: bool) -> ClientResult<String> {
    let event = find_event(directory, id)?;
    let url = google_calendar_url(event);

    if copy {
        actions::copy_to_clipboard(&url)?;
    }
    if open {
        actions::open_url(&url)?;
    }

    Ok(url)
}

/// Where an iCalendar export goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcalOutput<'a> {
    /// Print the document.
    Document,
    /// Print a `data:` URL.
    DataUrl,
    /// Write `<id>.ics` into a directory.
    Directory(&'a Path),
}

/// Exports an event as iCalendar.
pub fn ical(
    directory: &EventDirectory,
    id: &str,
    output: IcalOutput<'_>,
    prodid: &str,
) -> ClientResult<String> {
    let event = find_event(directory, id)?;
    match output {
        IcalOutput::Document => Ok(ical_document(event, prodid)),
        IcalOutput::DataUrl => Ok(ical_data_url_with_prodid(event, prodid)),
        IcalOutput::Directory(dir) => {
            let path = actions::write_ics_file(dir, event, prodid)?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}

/// The RSVP action for an event, opening the mail client when asked.
pub fn rsvp(
    directory: &EventDirectory,
    id: &str,
    contact_email: &str,
    open: bool,
    format: OutputFormat,
) -> ClientResult<String> {
    let event = find_event(directory, id)?;
    let action = event.rsvp_action(contact_email);

    if open {
        match action {
            RsvpAction::Mailto(ref url) => actions::open_url(url)?,
            RsvpAction::Confirmation(_) => {
                info!(id = %event.id, "event takes no email RSVP, nothing to open")
            }
        }
    }

    match format {
        OutputFormat::Text => Ok(action.value().to_string()),
        OutputFormat::Json => to_json(&json!({
            "id": event.id,
            "buttonLabel": event.button_label(),
            "rsvp": action,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clubevents_core::export::DEFAULT_PRODID;
    use clubevents_core::{Event, EventType};

    use crate::error::ClientError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn directory() -> EventDirectory {
        EventDirectory::new(vec![
            Event::new("fair", "County Fair Booth", EventType::Civitan, date(2025, 8, 6))
                .with_end_date(date(2025, 8, 9))
                .with_location("Fairgrounds"),
            Event::new(
                "vox-pop-tour",
                "Tour: Vox Pop Uli",
                EventType::Civitan,
                date(2025, 6, 5),
            )
            .with_no_email(Some("See you at the museum!".to_string())),
            Event::new("banquet", "Awards Banquet", EventType::Civitan, date(2025, 11, 8))
                .with_button_text("Reserve a seat")
                .with_email_subject("Banquet reservation"),
        ])
        .unwrap()
    }

    #[test]
    fn google_link() {
        let url = google(&directory(), "fair", false, false).unwrap();
        insta::assert_snapshot!(
            url,
            @"https://calendar.google.com/calendar/render?action=TEMPLATE&text=County%20Fair%20Booth&dates=20250806T000000/20250809T235900&location=Fairgrounds"
        );
    }

    #[test]
    fn ical_document_and_data_url() {
        let directory = directory();
        let document = ical(&directory, "fair", IcalOutput::Document, DEFAULT_PRODID).unwrap();
        assert!(document.contains("DTSTART;VALUE=DATE:20250806\r\n"));
        assert!(document.contains("DTEND;VALUE=DATE:20250810\r\n"));

        let url = ical(&directory, "fair", IcalOutput::DataUrl, DEFAULT_PRODID).unwrap();
        assert!(url.starts_with("data:text/calendar;charset=utf8,"));
        assert!(url.contains("BEGIN%3AVEVENT"));
    }

    #[test]
    fn ical_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = ical(
            &directory(),
            "fair",
            IcalOutput::Directory(dir.path()),
            "-//Test//EN",
        )
        .unwrap();
        assert_eq!(out, format!("Wrote {}", dir.path().join("fair.ics").display()));

        let written = std::fs::read_to_string(dir.path().join("fair.ics")).unwrap();
        assert!(written.contains("PRODID:-//Test//EN\r\n"));
    }

    #[test]
    fn unknown_event() {
        let err = google(&directory(), "picnic", false, false).unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[test]
    fn rsvp_variants() {
        let directory = directory();
        assert_eq!(
            rsvp(&directory, "fair", "info@example.org", false, OutputFormat::Text).unwrap(),
            "mailto:info@example.org?subject=RSVP%3A%20County%20Fair%20Booth"
        );
        assert_eq!(
            rsvp(&directory, "vox-pop-tour", "info@example.org", true, OutputFormat::Text)
                .unwrap(),
            "See you at the museum!"
        );

        let out = rsvp(&directory, "banquet", "rsvp@club.example", false, OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["buttonLabel"], "Reserve a seat");
        assert_eq!(value["rsvp"]["action"], "mailto");
        assert_eq!(
            value["rsvp"]["value"],
            "mailto:rsvp@club.example?subject=Banquet%20reservation"
        );
    }
}
