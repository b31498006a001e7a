//! Gallery commands.

use clubevents_core::format::format_date;
use clubevents_core::{Gallery, GalleryFilter, GalleryItem, OutputFormat};
use tracing::debug;

use crate::commands::to_json;
use crate::error::ClientResult;

fn format_item(item: &GalleryItem) -> String {
    let mut line = format!("{} [{}] {}", format_date(item.date), item.category, item.title);
    for tag in &item.tags {
        line.push_str(" #");
        line.push_str(tag);
    }
    line
}

/// Items accepted by `filter`, in authored order.
pub fn list(
    gallery: &Gallery,
    filter: &GalleryFilter,
    format: OutputFormat,
    empty_text: &str,
) -> ClientResult<String> {
    let items = gallery.filter(filter);
    debug!(?filter, shown = items.len(), total = gallery.len(), "filtered gallery");

    match format {
        OutputFormat::Json => to_json(&items),
        OutputFormat::Text if items.is_empty() => Ok(empty_text.to_string()),
        OutputFormat::Text => Ok(items
            .into_iter()
            .map(format_item)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// The gallery's categories in first-seen order.
pub fn categories(gallery: &Gallery, format: OutputFormat) -> ClientResult<String> {
    let categories = gallery.categories();
    match format {
        OutputFormat::Json => to_json(&categories),
        OutputFormat::Text => Ok(categories.join("\n")),
    }
}
