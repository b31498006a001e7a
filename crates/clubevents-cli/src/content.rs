//! Content file loading.
//!
//! The site content is a single file holding the event directory and the
//! gallery, either as TOML:
//!
//! ```toml
//! [[events]]
//! id = "june-meeting"
//! title = "Monthly Meeting"
//! startDate = "2025-06-05"
//! type = "civitan"
//! ```
//!
//! or as JSON (`{"events": [...], "gallery": [...]}`), chosen by extension.
//! Everything is validated here, once, before any command runs.

use std::path::Path;

use clubevents_core::{EventDirectory, EventRecord, Gallery, GalleryRecord};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};

/// The raw shape of a content file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentFile {
    events: Vec<EventRecord>,
    gallery: Vec<GalleryRecord>,
}

/// Validated site content.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub directory: EventDirectory,
    pub gallery: Gallery,
}

/// Content file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// Picks the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl Content {
    /// Reads and validates a content file.
    pub fn load(path: &Path) -> ClientResult<Self> {
        debug!(path = %path.display(), "loading content");
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Content(format!("failed to read {}: {}", path.display(), e))
        })?;
        let content = Self::parse(&text, ContentFormat::from_path(path)).map_err(|e| match e {
            ClientError::Content(msg) => {
                ClientError::Content(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!(
            events = content.directory.len(),
            gallery = content.gallery.len(),
            "content loaded"
        );
        Ok(content)
    }

    /// Parses and validates content text.
    pub fn parse(text: &str, format: ContentFormat) -> ClientResult<Self> {
        let raw: ContentFile = match format {
            ContentFormat::Toml => {
                toml::from_str(text).map_err(|e| ClientError::Content(e.to_string()))?
            }
            ContentFormat::Json => {
                serde_json::from_str(text).map_err(|e| ClientError::Content(e.to_string()))?
            }
        };

        Ok(Self {
            directory: EventDirectory::from_records(raw.events)?,
            gallery: Gallery::from_records(raw.gallery)?,
        })
    }
}
