//! Listing filter and page types for article queries.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter parameters for article listing.
///
/// All filters are ANDed; date bounds are inclusive on `created_at`.
/// Serialization order is the struct declaration order, which keeps the
/// derived cache key stable for identical filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ArticleFilter {
    /// Number of records to skip.
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of records to return.
    #[serde(default = "ArticleFilter::default_limit")]
    pub limit: u64,
    /// Inclusive lower bound on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Restrict to articles by this author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
}

impl ArticleFilter {
    /// The default page size.
    pub const DEFAULT_LIMIT: u64 = 10;

    const fn default_limit() -> u64 {
        Self::DEFAULT_LIMIT
    }

    /// Creates a filter for the first page with default limit.
    #[must_use]
    pub fn first_page() -> Self {
        Self::default()
    }

    /// Sets the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the limit. A limit of zero is bumped to one.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Restricts results to a single author.
    #[must_use]
    pub const fn with_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Sets the inclusive creation-time bounds.
    #[must_use]
    pub const fn with_date_range(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Canonical serialization used as the cache key suffix.
    ///
    /// Field order follows the struct declaration, so two equal filters
    /// always produce the same string.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
            start_date: None,
            end_date: None,
            author_id: None,
        }
    }
}

/// A filtered page of results: the matching window plus the total match
/// count ignoring pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredPage<T> {
    /// The items within the requested offset/limit window.
    pub items: Vec<T>,
    /// Total number of rows matching the filter, ignoring pagination.
    pub count: u64,
}

impl<T> FilteredPage<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<T>, count: u64) -> Self {
        Self { items, count }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
        }
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maps the page items to a different type, keeping the count.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> FilteredPage<U> {
        FilteredPage {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
        }
    }
}

impl<T> Default for FilteredPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for FilteredPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
