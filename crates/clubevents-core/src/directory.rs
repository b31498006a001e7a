//! The event directory and its queries.
//!
//! [`EventDirectory`] is the static list of club events. It is validated once
//! when it is built and is immutable afterwards, so every query here is a
//! pure function of the directory and its arguments. The reference date is
//! always passed in by the caller; nothing in this module reads a clock.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::DirectoryError;
use crate::event::{Event, EventDot, EventRecord};

/// An immutable, validated list of events in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventDirectory {
    events: Vec<Event>,
}

impl EventDirectory {
    /// Builds a directory from already-parsed events.
    ///
    /// # Errors
    ///
    /// Fails on the first event that breaks an invariant: empty or duplicate
    /// id, end date before start date, next meeting date not after the start
    /// date, or a malformed outbound URL.
    pub fn new(events: Vec<Event>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(events.len());

        for (position, event) in events.iter().enumerate() {
            if let Err(e) = event.validate(position) {
                warn!(position, error = %e, "rejecting event directory");
                return Err(e);
            }
            if !seen.insert(event.id.as_str()) {
                warn!(id = %event.id, "rejecting event directory: duplicate id");
                return Err(DirectoryError::DuplicateId(event.id.clone()));
            }
            debug!(id = %event.id, start = %event.start_date, "accepted event");
        }

        Ok(Self { events })
    }

    /// Builds a directory from authored records, parsing every date field.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed date or broken invariant.
    pub fn from_records(
        records: impl IntoIterator<Item = EventRecord>,
    ) -> Result<Self, DirectoryError> {
        let events = records
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!(error = %e, "rejecting event record"))?;
        Self::new(events)
    }

    /// All events in authored order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the directory holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Looks up an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events starting on or after `today`, in ascending start order.
    ///
    /// The sort is stable: events sharing a start date keep their authored
    /// order.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.is_in_future(today))
            .collect();
        upcoming.sort_by_key(|e| e.start_date);
        upcoming
    }

    /// The first `count` upcoming events, or all of them if there are fewer.
    pub fn next_events(&self, today: NaiveDate, count: usize) -> Vec<&Event> {
        let mut upcoming = self.upcoming_events(today);
        upcoming.truncate(count);
        upcoming
    }

    /// Events taking place on `date`, in authored order.
    ///
    /// A multi-day event matches every day of its inclusive span.
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.occurs_on(date)).collect()
    }

    /// Type-tagged markers for the events on `date`, in authored order.
    ///
    /// Matches exactly the same events as [`events_for_date`](Self::events_for_date).
    pub fn event_dots(&self, date: NaiveDate) -> Vec<EventDot<'_>> {
        self.events
            .iter()
            .filter(|e| e.occurs_on(date))
            .map(EventDot::new)
            .collect()
    }
}

impl<'a> IntoIterator for &'a EventDirectory {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
