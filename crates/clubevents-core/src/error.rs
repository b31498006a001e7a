//! Error types for content validation.
//!
//! Every error here is an authoring error: the directory and the gallery are
//! static content, so they are rejected as a whole when they are loaded and
//! the query functions never fail.

use chrono::NaiveDate;
use thiserror::Error;

/// A date string that is not a strict `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The string does not have the `YYYY-MM-DD` shape.
    #[error("expected a YYYY-MM-DD date, got {0:?}")]
    Malformed(String),
    /// The string has the right shape but names no real day (e.g. `2025-02-30`).
    #[error("{0:?} is not a valid calendar date")]
    OutOfRange(String),
}

/// Errors raised while building an [`EventDirectory`](crate::EventDirectory).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// An event has an empty `id`.
    #[error("event at position {0} has an empty id")]
    EmptyId(usize),

    /// Two events share the same `id`.
    #[error("event id {0:?} is defined more than once")]
    DuplicateId(String),

    /// A date field failed to parse.
    #[error("event {id:?}: invalid {field}: {source}")]
    InvalidDate {
        id: String,
        field: &'static str,
        #[source]
        source: DateError,
    },

    /// `endDate` falls before `startDate`.
    #[error("event {id:?}: end date {end} is before start date {start}")]
    EndBeforeStart {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// `nextMeetingDate` does not come after `startDate`.
    #[error("event {id:?}: next meeting date {next} is not after start date {start}")]
    NextMeetingNotAfterStart {
        id: String,
        start: NaiveDate,
        next: NaiveDate,
    },

    /// An outbound link is not an absolute URL.
    #[error("event {id:?}: invalid {field} {value:?}: {source}")]
    InvalidUrl {
        id: String,
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors raised while building a [`Gallery`](crate::Gallery).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// A gallery item has an empty `id`.
    #[error("gallery item at position {0} has an empty id")]
    EmptyId(usize),

    /// Two gallery items share the same `id`.
    #[error("gallery item id {0:?} is defined more than once")]
    DuplicateId(String),

    /// The item date failed to parse.
    #[error("gallery item {id:?}: invalid date: {source}")]
    InvalidDate {
        id: String,
        #[source]
        source: DateError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_error_messages() {
        assert_eq!(
            DateError::Malformed("6/5/2025".into()).to_string(),
            "expected a YYYY-MM-DD date, got \"6/5/2025\""
        );
        assert_eq!(
            DateError::OutOfRange("2025-02-30".into()).to_string(),
            "\"2025-02-30\" is not a valid calendar date"
        );
    }

    #[test]
    fn directory_error_carries_source() {
        use std::error::Error as _;

        let err = DirectoryError::InvalidDate {
            id: "picnic".into(),
            field: "startDate",
            source: DateError::Malformed("soon".into()),
        };
        assert_eq!(
            err.to_string(),
            "event \"picnic\": invalid startDate: expected a YYYY-MM-DD date, got \"soon\""
        );
        assert!(err.source().is_some());
    }
}
