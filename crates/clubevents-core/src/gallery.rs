//! Photo gallery and its filters.
//!
//! A [`Gallery`] is static content validated at load, like the event
//! directory. [`GalleryFilter`] composes up to three optional predicates
//! (category, inclusive date range, free-text search); an item is shown
//! when every predicate that is set accepts it.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GalleryError;
use crate::time::parse_iso_date;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A gallery item as authored in a content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A validated gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub tags: Vec<String>,
}

impl TryFrom<GalleryRecord> for GalleryItem {
    type Error = GalleryError;

    fn try_from(record: GalleryRecord) -> Result<Self, Self::Error> {
        let date = parse_iso_date(&record.date).map_err(|source| GalleryError::InvalidDate {
            id: record.id.clone(),
            source,
        })?;

        Ok(Self {
            id: record.id,
            title: record.title,
            category: record.category,
            date,
            description: record.description,
            image: record.image,
            tags: record.tags,
        })
    }
}

/// An immutable, validated list of gallery items in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Builds a gallery from parsed items.
    ///
    /// # Errors
    ///
    /// Fails on an empty or duplicate id.
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, GalleryError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                warn!(position, "rejecting gallery: empty id");
                return Err(GalleryError::EmptyId(position));
            }
            if !seen.insert(item.id.as_str()) {
                warn!(id = %item.id, "rejecting gallery: duplicate id");
                return Err(GalleryError::DuplicateId(item.id.clone()));
            }
        }
        debug!(count = items.len(), "loaded gallery");
        Ok(Self { items })
    }

    /// Builds a gallery from authored records.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed date, empty id or duplicate id.
    pub fn from_records(
        records: impl IntoIterator<Item = GalleryRecord>,
    ) -> Result<Self, GalleryError> {
        let items = records
            .into_iter()
            .map(GalleryItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    /// All items in authored order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the gallery is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items accepted by `filter`, in authored order.
    pub fn filter(&self, filter: &GalleryFilter) -> Vec<&GalleryItem> {
        if filter.is_unrestricted() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&item.category))
            {
                categories.push(&item.category);
            }
        }
        categories
    }
}

/// A conjunction of optional gallery predicates.
///
/// The default filter accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    category: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    search: Option<String>,
}

impl GalleryFilter {
    /// Creates a filter that accepts every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one category (case-insensitive). `"all"` clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.trim().is_empty()
            && !category.trim().eq_ignore_ascii_case(ALL_CATEGORIES))
        .then(|| category.trim().to_lowercase());
        self
    }

    /// Keeps items dated on or after `from`.
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Keeps items dated on or before `to`.
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Keeps items whose title, description or tags contain `search`
    /// (case-insensitive). A blank search clears it.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let search = search.trim();
        self.search = (!search.is_empty()).then(|| search.to_lowercase());
        self
    }

    /// Returns `true` if no predicate is set.
    pub fn is_unrestricted(&self) -> bool {
        self.category.is_none() && self.from.is_none() && self.to.is_none() && self.search.is_none()
    }

    /// Returns `true` if every set predicate accepts `item`.
    pub fn matches(&self, item: &GalleryItem) -> bool {
        self.matches_category(item) && self.matches_dates(item) && self.matches_search(item)
    }

    fn matches_category(&self, item: &GalleryItem) -> bool {
        self.category
            .as_deref()
            .is_none_or(|c| item.category.to_lowercase() == c)
    }

    fn matches_dates(&self, item: &GalleryItem) -> bool {
        self.from.is_none_or(|from| item.date >= from) && self.to.is_none_or(|to| item.date <= to)
    }

    fn matches_search(&self, item: &GalleryItem) -> bool {
        let Some(ref needle) = self.search else {
            return true;
        };
        item.title.to_lowercase().contains(needle)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
