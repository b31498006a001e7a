//! Subcommand implementations.
//!
//! Each command renders its output to a `String`; `main` does the printing.

pub mod config;
pub mod events;
pub mod export;
pub mod gallery;

use clubevents_core::{Event, EventDirectory};
use serde::Serialize;

use crate::error::{ClientError, ClientResult};

/// Looks up an event by id.
pub fn find_event<'a>(directory: &'a EventDirectory, id: &str) -> ClientResult<&'a Event> {
    directory
        .get(id)
        .ok_or_else(|| ClientError::NotFound(id.to_string()))
}

/// Pretty-printed JSON for `--json` output.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> ClientResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ClientError::Output(format!("failed to serialize JSON: {}", e)))
}
