//! Cache key construction.
//!
//! Keys are built from the operation name plus the canonical JSON of any
//! parameters, so two equivalent lookups always share an entry.

use gazette_core::{ArticleFilter, ArticleId};

/// Prefix for all cache keys to namespace them.
pub const CACHE_PREFIX: &str = "gazette:cache";

/// Key for a single article looked up by id.
#[must_use]
pub fn article_by_id(id: ArticleId) -> String {
    format!("{}:article:id:{}", CACHE_PREFIX, id)
}

/// Key for a filtered article listing.
///
/// The filter's canonical JSON form is embedded in the key, so the same
/// filter values always map to the same entry regardless of how the
/// filter was constructed.
#[must_use]
pub fn articles_filtered(filter: &ArticleFilter) -> String {
    format!("{}:articles:filtered:{}", CACHE_PREFIX, filter.canonical_key())
}

/// Pattern matching every article-related cache entry.
///
/// Used to invalidate all article entries after a mutation, since a single
/// update can affect an unbounded number of filtered listings.
#[must_use]
pub fn article_invalidation_pattern() -> &'static str {
    "*article*"
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_core::UserId;

    #[test]
    fn test_article_by_id_key() {
        let id = ArticleId::new();
        let key = article_by_id(id);
        assert!(key.starts_with("gazette:cache:article:id:"));
        assert!(key.ends_with(&id.to_string()));
    }

    #[test]
    fn test_filtered_key_is_stable() {
        let filter = ArticleFilter::default().with_limit(25).with_offset(5);
        assert_eq!(articles_filtered(&filter), articles_filtered(&filter));
    }

    #[test]
    fn test_filtered_key_varies_with_filter() {
        let base = ArticleFilter::default();
        let by_author = ArticleFilter::default().with_author(UserId::new());
        assert_ne!(articles_filtered(&base), articles_filtered(&by_author));
    }

    #[test]
    fn test_invalidation_pattern_matches_both_key_shapes() {
        let pattern = article_invalidation_pattern();
        assert_eq!(pattern, "*article*");
        assert!(article_by_id(ArticleId::new()).contains("article"));
        assert!(articles_filtered(&ArticleFilter::default()).contains("article"));
    }
}
