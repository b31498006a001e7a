//! Event actions: open links, copy to clipboard, write .ics files.

use std::path::{Path, PathBuf};

use clubevents_core::Event;
use clubevents_core::export::ical_document;
use tracing::info;

use crate::error::{ClientError, ClientResult};

/// Opens a link in the default browser or mail client.
pub fn open_url(url: &str) -> ClientResult<()> {
    info!(url = %url, "opening URL");
    open::that(url).map_err(|e| ClientError::Action(format!("failed to open URL: {}", e)))
}

/// Copies text to the clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> ClientResult<()> {
    info!("copying link to clipboard");

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ClientError::Action(format!("failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| ClientError::Action(format!("failed to copy to clipboard: {}", e)))
}

/// Copies text to the clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> ClientResult<()> {
    Err(ClientError::Action(
        "clubevents was built without clipboard support".into(),
    ))
}

/// Writes the event's iCalendar document to `<dir>/<id>.ics` and returns the path.
pub fn write_ics_file(dir: &Path, event: &Event, prodid: &str) -> ClientResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(event.ics_filename());
    std::fs::write(&path, ical_document(event, prodid))?;
    info!(id = %event.id, path = %path.display(), "wrote calendar file");
    Ok(path)
}
