//! Month grid for calendar views.
//!
//! A [`MonthGrid`] lays out one month of the directory the way a wall
//! calendar does (weeks start on Sunday) and annotates each day with the
//! [`EventDot`]s from [`EventDirectory::event_dots`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::directory::EventDirectory;
use crate::event::{EventDot, EventType};

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub dots: Vec<EventDot<'a>>,
}

impl DayCell<'_> {
    /// Returns `true` if at least one event falls on this day.
    pub fn has_events(&self) -> bool {
        !self.dots.is_empty()
    }

    /// Distinct event types on this day, in first-seen order.
    pub fn kinds(&self) -> Vec<EventType> {
        let mut kinds = Vec::new();
        for dot in &self.dots {
            if !kinds.contains(&dot.kind) {
                kinds.push(dot.kind);
            }
        }
        kinds
    }
}

/// A single month of the calendar, annotated with event dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    first: NaiveDate,
    leading_blanks: u32,
    days: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Builds the grid for `year`/`month`, or `None` if the month is invalid.
    pub fn build(directory: &'a EventDirectory, year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| DayCell {
                date,
                dots: directory.event_dots(date),
            })
            .collect();

        Some(Self {
            first,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Blank cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    /// Every day of the month in order.
    pub fn days(&self) -> &[DayCell<'a>] {
        &self.days
    }

    /// Title such as "August 2025".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Days that have at least one event.
    pub fn busy_days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.days.iter().filter(|c| c.has_events())
    }

    /// The grid split into Sunday-first weeks; `None` marks a blank cell.
    ///
    /// The last week is padded with blanks to seven cells.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell<'a>>>> {
        let cells: Vec<Option<&DayCell<'a>>> = std::iter::repeat_n(None, self.leading_blanks as usize)
            .chain(self.days.iter().map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|week| {
                let mut week = week.to_vec();
                week.resize(7, None);
                week
            })
            .collect()
    }
}
