//! Article filter query extractor.

use chrono::{DateTime, Utc};
use gazette_core::{ArticleFilter, UserId};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for filtered article listings.
///
/// All filters are combined with AND; date bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ArticleFilterQuery {
    /// Number of records to skip (default 0).
    pub offset: Option<u64>,
    /// Maximum number of records to return (default 10).
    pub limit: Option<u64>,
    /// Inclusive lower bound on creation time (RFC 3339).
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on creation time (RFC 3339).
    pub end_date: Option<DateTime<Utc>>,
    /// Restrict to articles by this author.
    pub author_id: Option<UserId>,
}

impl From<ArticleFilterQuery> for ArticleFilter {
    fn from(query: ArticleFilterQuery) -> Self {
        let mut filter = ArticleFilter::default()
            .with_offset(query.offset.unwrap_or(0))
            .with_date_range(query.start_date, query.end_date);
        if let Some(limit) = query.limit {
            filter = filter.with_limit(limit);
        }
        if let Some(author_id) = query.author_id {
            filter = filter.with_author(author_id);
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_default_pagination() {
        let filter: ArticleFilter = ArticleFilterQuery::default().into();
        assert_eq!(filter.offset, 0);
        assert_eq!(filter.limit, ArticleFilter::DEFAULT_LIMIT);
        assert!(filter.author_id.is_none());
    }

    #[test]
    fn test_query_values_carry_over() {
        let author = UserId::new();
        let query = ArticleFilterQuery {
            offset: Some(20),
            limit: Some(50),
            author_id: Some(author),
            ..Default::default()
        };
        let filter: ArticleFilter = query.into();
        assert_eq!(filter.offset, 20);
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.author_id, Some(author));
    }
}
