//! Article service implementation.

use crate::access::check_access;
use crate::article_service::ArticleService;
use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{
    ArticleListResponse, ArticleResponse, CreateArticleRequest, UpdateArticleRequest,
};
use async_trait::async_trait;
use gazette_core::{
    Article, ArticleChanges, ArticleFilter, ArticleId, GazetteError, GazetteResult, UserId,
    ValidateExt,
};
use gazette_repository::ArticleRepository;
use serde::{de::DeserializeOwned, Serialize};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Article service implementation with read-through caching.
#[derive(Component)]
#[shaku(interface = ArticleService)]
pub struct ArticleServiceComponent {
    #[shaku(inject)]
    article_repository: Arc<dyn ArticleRepository>,

    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl ArticleServiceComponent {
    /// Read a cached value, treating any cache failure as a miss.
    async fn cache_get<T: DeserializeOwned + Send>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Cache read failed for key '{}': {}", key, e);
                None
            }
        }
    }

    /// Store a value in the cache, logging failures instead of surfacing them.
    async fn cache_set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set(key, value, self.cache.default_ttl()).await {
            warn!("Cache write failed for key '{}': {}", key, e);
        }
    }

    /// Drop every article-related cache entry after a mutation.
    async fn invalidate_article_cache(&self) {
        let pattern = cache_keys::article_invalidation_pattern();
        match self.cache.delete_pattern(pattern).await {
            Ok(count) => debug!("Invalidated {} article cache entries", count),
            Err(e) => warn!("Cache invalidation failed for pattern '{}': {}", pattern, e),
        }
    }

    /// Reject the title if another article already uses it.
    async fn ensure_title_available(&self, title: &str) -> GazetteResult<()> {
        if self.article_repository.find_by_title(title).await?.is_some() {
            return Err(GazetteError::conflict(format!(
                "Article with title \"{}\" already exists",
                title
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleService for ArticleServiceComponent {
    async fn create_article(
        &self,
        author: UserId,
        request: CreateArticleRequest,
    ) -> GazetteResult<ArticleResponse> {
        debug!("Creating article '{}' for author {}", request.title, author);
        request.validate_request()?;

        self.ensure_title_available(&request.title).await?;

        let article = Article::new(request.title, request.description, request.content, author);
        let saved = self.article_repository.save(&article).await?;

        // Freshly created articles are not in any cached listing yet, so
        // creation does not invalidate.
        info!("Created article {} by author {}", saved.id, author);
        Ok(ArticleResponse::from(saved))
    }

    async fn get_article(&self, id: ArticleId) -> GazetteResult<ArticleResponse> {
        let key = cache_keys::article_by_id(id);
        if let Some(cached) = self.cache_get::<ArticleResponse>(&key).await {
            return Ok(cached);
        }

        let article = self
            .article_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GazetteError::not_found("Article", id))?;

        let response = ArticleResponse::from(article);
        self.cache_set(&key, &response).await;
        Ok(response)
    }

    async fn list_articles(&self, filter: ArticleFilter) -> GazetteResult<ArticleListResponse> {
        let key = cache_keys::articles_filtered(&filter);
        if let Some(cached) = self.cache_get::<ArticleListResponse>(&key).await {
            return Ok(cached);
        }

        let page = self.article_repository.list_filtered(&filter).await?;
        let response = ArticleListResponse::from(page);
        self.cache_set(&key, &response).await;
        Ok(response)
    }

    async fn update_article(
        &self,
        id: ArticleId,
        actor: UserId,
        request: UpdateArticleRequest,
    ) -> GazetteResult<ArticleResponse> {
        debug!("Updating article {} for actor {}", id, actor);
        request.validate_request()?;

        let (current, author) = self
            .article_repository
            .find_with_author(id)
            .await?
            .ok_or_else(|| GazetteError::not_found("Article", id))?;

        check_access(author.id, actor)?;

        let changes = ArticleChanges::from(request);

        // Keeping the same title is not a conflict with itself
        if changes.renames_from(&current.title) {
            self.ensure_title_available(changes.title.as_deref().unwrap_or_default())
                .await?;
        }

        let updated = self
            .article_repository
            .update(id, changes)
            .await?
            .ok_or_else(|| GazetteError::not_found("Article", id))?;

        self.invalidate_article_cache().await;

        info!("Updated article {}", id);
        Ok(ArticleResponse::from(updated))
    }

    async fn delete_article(&self, id: ArticleId, actor: UserId) -> GazetteResult<()> {
        debug!("Deleting article {} for actor {}", id, actor);

        let (_, author) = self
            .article_repository
            .find_with_author(id)
            .await?
            .ok_or_else(|| GazetteError::not_found("Article", id))?;

        check_access(author.id, actor)?;

        if !self.article_repository.delete(id).await? {
            return Err(GazetteError::not_found("Article", id));
        }

        self.invalidate_article_cache().await;

        info!("Deleted article {}", id);
        Ok(())
    }
}
