//! Article entity.

use crate::{ArticleId, Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Article entity authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Article {
    /// Unique identifier for the article.
    pub id: ArticleId,

    /// Article title, unique across all articles.
    #[validate(length(min = 3, max = 100))]
    pub title: String,

    /// Short summary of the article.
    #[validate(length(min = 10, max = 500))]
    pub description: String,

    /// Full article body.
    #[validate(length(min = 20, max = 10000))]
    pub content: String,

    /// Identifier of the authoring user.
    pub author_id: UserId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A partial set of article changes.
///
/// Absent fields are left untouched when applied; there is no way to
/// blank a field through a change set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleChanges {
    /// New title, if changing.
    pub title: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New content, if changing.
    pub content: Option<String>,
}

impl ArticleChanges {
    /// Returns true when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.content.is_none()
    }

    /// Returns true when the change set renames the article to a title
    /// different from `current`.
    #[must_use]
    pub fn renames_from(&self, current: &str) -> bool {
        self.title.as_deref().is_some_and(|t| t != current)
    }
}

impl Article {
    /// Creates a new article with the given details.
    #[must_use]
    pub fn new(title: String, description: String, content: String, author_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: ArticleId::new(),
            title,
            description,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a change set, overwriting only the fields it carries.
    pub fn apply(&mut self, changes: ArticleChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

impl Entity<ArticleId> for Article {
    fn id(&self) -> &ArticleId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_article(title: &str, author_id: UserId) -> Article {
        Article::new(
            title.to_string(),
            "A short description of the piece".to_string(),
            "The full body of the article, long enough to pass validation".to_string(),
            author_id,
        )
    }

    #[test]
    fn test_article_creation() {
        let author = UserId::new();
        let article = create_article("Rust at the Edge", author);

        assert_eq!(article.title, "Rust at the Edge");
        assert_eq!(article.author_id, author);
        assert_eq!(article.created_at, article.updated_at);
    }

    #[test]
    fn test_apply_single_field() {
        let mut article = create_article("Original Title", UserId::new());
        let description = article.description.clone();
        let content = article.content.clone();

        article.apply(ArticleChanges {
            title: Some("New Title".to_string()),
            ..Default::default()
        });

        assert_eq!(article.title, "New Title");
        assert_eq!(article.description, description);
        assert_eq!(article.content, content);
    }

    #[test]
    fn test_apply_empty_changes_keeps_fields() {
        let mut article = create_article("Untouched", UserId::new());
        let before = article.clone();

        article.apply(ArticleChanges::default());

        assert_eq!(article.title, before.title);
        assert_eq!(article.description, before.description);
        assert_eq!(article.content, before.content);
        assert_eq!(article.id, before.id);
        assert_eq!(article.author_id, before.author_id);
        assert_eq!(article.created_at, before.created_at);
    }

    #[test]
    fn test_apply_all_fields() {
        let mut article = create_article("Old", UserId::new());
        article.apply(ArticleChanges {
            title: Some("Brand New".to_string()),
            description: Some("A replacement description".to_string()),
            content: Some("Replacement content that is comfortably long".to_string()),
        });

        assert_eq!(article.title, "Brand New");
        assert_eq!(article.description, "A replacement description");
        assert_eq!(article.content, "Replacement content that is comfortably long");
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(ArticleChanges::default().is_empty());
        assert!(!ArticleChanges {
            content: Some("x".to_string()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_changes_renames_from() {
        let changes = ArticleChanges {
            title: Some("Same".to_string()),
            ..Default::default()
        };
        assert!(!changes.renames_from("Same"));
        assert!(changes.renames_from("Different"));
        assert!(!ArticleChanges::default().renames_from("Anything"));
    }
}
