//! Article data transfer objects.

use chrono::{DateTime, Utc};
use gazette_core::{Article, ArticleChanges, ArticleId, FilteredPage, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new article.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateArticleRequest {
    /// Article title, unique across all articles.
    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: String,

    /// Short summary shown in listings.
    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must be 10-500 characters"
    ))]
    pub description: String,

    /// Full article body.
    #[validate(length(
        min = 20,
        max = 10000,
        message = "Content must be 20-10000 characters"
    ))]
    pub content: String,
}

/// Request to update an existing article.
///
/// Every field is optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: Option<String>,

    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must be 10-500 characters"
    ))]
    pub description: Option<String>,

    #[validate(length(
        min = 20,
        max = 10000,
        message = "Content must be 20-10000 characters"
    ))]
    pub content: Option<String>,
}

impl From<UpdateArticleRequest> for ArticleChanges {
    fn from(request: UpdateArticleRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            content: request.content,
        }
    }
}

/// Article representation returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            description: article.description,
            content: article.content,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Page of articles with the total count of matches.
///
/// `count` reflects every article matching the filter, not just the page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleResponse>,
    pub count: u64,
}

impl From<FilteredPage<Article>> for ArticleListResponse {
    fn from(page: FilteredPage<Article>) -> Self {
        Self {
            count: page.count,
            items: page.items.into_iter().map(ArticleResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateArticleRequest {
            title: "Ok".to_string(),
            description: "short".to_string(),
            content: "tiny".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateArticleRequest {
            title: "A Valid Title".to_string(),
            description: "A description long enough to pass".to_string(),
            content: "Content that comfortably clears the minimum length".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_absent_fields_are_valid() {
        let request = UpdateArticleRequest::default();
        assert!(request.validate().is_ok());

        let changes: ArticleChanges = request.into();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_update_request_present_fields_are_validated() {
        let request = UpdateArticleRequest {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_response_preserves_count() {
        let author = UserId::new();
        let article = Article::new(
            "A Valid Title".to_string(),
            "A description long enough to pass".to_string(),
            "Content that comfortably clears the minimum length".to_string(),
            author,
        );
        let page = FilteredPage::new(vec![article], 42);
        let response = ArticleListResponse::from(page);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.count, 42);
    }
}
