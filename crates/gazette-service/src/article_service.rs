//! Article service trait.

use crate::dto::{
    ArticleListResponse, ArticleResponse, CreateArticleRequest, UpdateArticleRequest,
};
use async_trait::async_trait;
use gazette_core::{ArticleFilter, ArticleId, GazetteResult, UserId};
use shaku::Interface;

/// Article management operations.
///
/// Reads go through the cache; mutations invalidate every article entry.
#[async_trait]
pub trait ArticleService: Interface + Send + Sync {
    /// Create a new article authored by `author`.
    ///
    /// Fails with a conflict if the title is already taken.
    async fn create_article(
        &self,
        author: UserId,
        request: CreateArticleRequest,
    ) -> GazetteResult<ArticleResponse>;

    /// Fetch a single article by id.
    async fn get_article(&self, id: ArticleId) -> GazetteResult<ArticleResponse>;

    /// List articles matching `filter`, paginated and ordered by id.
    async fn list_articles(&self, filter: ArticleFilter) -> GazetteResult<ArticleListResponse>;

    /// Apply a partial update to an article.
    ///
    /// Only the author may update; absent fields are left untouched.
    async fn update_article(
        &self,
        id: ArticleId,
        actor: UserId,
        request: UpdateArticleRequest,
    ) -> GazetteResult<ArticleResponse>;

    /// Delete an article. Only the author may delete.
    async fn delete_article(&self, id: ArticleId, actor: UserId) -> GazetteResult<()>;
}
