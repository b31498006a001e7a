//! Event types for the club calendar.
//!
//! This module provides the two shapes an event takes:
//! - [`EventRecord`]: the authored form, as read from a content file
//! - [`Event`]: the validated form, with parsed dates, used by every query
//!
//! plus [`EventType`] for color-coding and [`EventDot`] for calendar cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DirectoryError;
use crate::time::{DateRange, parse_iso_date};

/// The category of an event, used for display color-coding only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A club event (meetings, service projects, socials).
    Civitan,
    /// A national observance or holiday.
    National,
    /// An international observance.
    International,
}

impl EventType {
    /// Returns the serialized name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Civitan => "civitan",
            Self::National => "national",
            Self::International => "international",
        }
    }

    /// Returns a human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Civitan => "Civitan",
            Self::National => "National",
            Self::International => "International",
        }
    }

    /// Single-character marker used in text calendars.
    pub fn marker(&self) -> char {
        match self {
            Self::Civitan => 'C',
            Self::National => 'N',
            Self::International => 'I',
        }
    }
}

/// An event as authored in a content file.
///
/// Dates are kept as strings here; they are checked and parsed when the
/// record is converted into an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(default)]
    pub no_email: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default)]
    pub is_no_meeting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_meeting_date: Option<String>,
}

/// A validated club event.
///
/// All dates are plain calendar days. `end_date`, when present, makes the
/// event span `[start_date, end_date]` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable unique identifier, also used for derived file names.
    pub id: String,
    /// Display title, possibly with a leading emoji.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Free-text time of day (e.g. "11:45 AM"); never parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    /// Show a confirmation message instead of building a mailto link.
    pub no_email: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// This entry marks a cancelled meeting or holiday, not a gathering.
    pub is_no_meeting: bool,
    /// The next real meeting after a cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_meeting_date: Option<NaiveDate>,
}

impl Event {
    /// Creates a new single-day event with the required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: EventType,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            location: None,
            start_date,
            end_date: None,
            time: None,
            kind,
            button_text: None,
            email_subject: None,
            no_email: false,
            rsvp_message: None,
            google_maps_url: None,
            external_url: None,
            is_no_meeting: false,
            next_meeting_date: None,
        }
    }

    /// Returns `true` if the event starts on or after `today`.
    ///
    /// An event happening today still counts as upcoming. Multi-day events
    /// that started before `today` do not, even while they are running.
    pub fn is_in_future(&self, today: NaiveDate) -> bool {
        self.start_date >= today
    }

    /// The inclusive span of days this event covers.
    ///
    /// A missing end date means a single-day event. A reversed range (which
    /// an [`EventDirectory`](crate::EventDirectory) never accepts) collapses
    /// to the start day.
    pub fn date_range(&self) -> DateRange {
        self.end_date
            .and_then(|end| DateRange::new(self.start_date, end))
            .unwrap_or_else(|| DateRange::single(self.start_date))
    }

    /// Last day of the event; the start date for single-day events.
    pub fn last_date(&self) -> NaiveDate {
        self.date_range().end()
    }

    /// Returns `true` if the event takes place on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date_range().contains(date)
    }

    /// File name for a downloaded calendar entry.
    pub fn ics_filename(&self) -> String {
        format!("{}.ics", self.id)
    }

    /// Checks the per-event invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the end date precedes the start
    /// date, the next meeting date is not after the start date, or an
    /// outbound link is not an absolute URL.
    pub fn validate(&self, position: usize) -> Result<(), DirectoryError> {
        if self.id.trim().is_empty() {
            return Err(DirectoryError::EmptyId(position));
        }

        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(DirectoryError::EndBeforeStart {
                id: self.id.clone(),
                start: self.start_date,
                end,
            });
        }

        if let Some(next) = self.next_meeting_date
            && next <= self.start_date
        {
            return Err(DirectoryError::NextMeetingNotAfterStart {
                id: self.id.clone(),
                start: self.start_date,
                next,
            });
        }

        for (field, value) in [
            ("googleMapsUrl", &self.google_maps_url),
            ("externalUrl", &self.external_url),
        ] {
            if let Some(value) = value {
                Url::parse(value).map_err(|source| DirectoryError::InvalidUrl {
                    id: self.id.clone(),
                    field,
                    value: value.clone(),
                    source,
                })?;
            }
        }

        Ok(())
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Builder method to set the free-text time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Builder method to set the button text.
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    /// Builder method to set the RSVP email subject.
    pub fn with_email_subject(mut self, subject: impl Into<String>) -> Self {
        self.email_subject = Some(subject.into());
        self
    }

    /// Builder method to replace the mailto action with a confirmation message.
    pub fn with_no_email(mut self, message: Option<String>) -> Self {
        self.no_email = true;
        self.rsvp_message = message;
        self
    }

    /// Builder method to set the map link.
    pub fn with_google_maps_url(mut self, url: impl Into<String>) -> Self {
        self.google_maps_url = Some(url.into());
        self
    }

    /// Builder method to set the external link.
    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    /// Builder method to mark the entry as a cancellation.
    pub fn with_no_meeting(mut self, next_meeting_date: Option<NaiveDate>) -> Self {
        self.is_no_meeting = true;
        self.next_meeting_date = next_meeting_date;
        self
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = DirectoryError;

    /// Parses the record's date fields.
    ///
    /// Only the date syntax is checked here; cross-field invariants are
    /// checked by [`Event::validate`].
    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let parse = |field: &'static str, value: &str| {
            parse_iso_date(value).map_err(|source| DirectoryError::InvalidDate {
                id: record.id.clone(),
                field,
                source,
            })
        };

        let start_date = parse("startDate", &record.start_date)?;
        let end_date = record
            .end_date
            .as_deref()
            .map(|v| parse("endDate", v))
            .transpose()?;
        let next_meeting_date = record
            .next_meeting_date
            .as_deref()
            .map(|v| parse("nextMeetingDate", v))
            .transpose()?;

        Ok(Self {
            id: record.id,
            title: record.title,
            description: record.description,
            location: record.location,
            start_date,
            end_date,
            time: record.time,
            kind: record.kind,
            button_text: record.button_text,
            email_subject: record.email_subject,
            no_email: record.no_email,
            rsvp_message: record.rsvp_message,
            google_maps_url: record.google_maps_url,
            external_url: record.external_url,
            is_no_meeting: record.is_no_meeting,
            next_meeting_date,
        })
    }
}

/// A calendar-cell annotation: the event and its type for color-coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventDot<'a> {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub event: &'a Event,
}

impl<'a> EventDot<'a> {
    /// Tags an event with its type.
    pub fn new(event: &'a Event) -> Self {
        Self {
            kind: event.kind,
            event,
        }
    }
}
