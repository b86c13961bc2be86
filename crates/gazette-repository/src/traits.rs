//! Repository trait definitions.

use async_trait::async_trait;
use gazette_core::{
    Article, ArticleChanges, ArticleFilter, ArticleId, FilteredPage, GazetteResult, Interface,
    User, UserId,
};

/// Article repository trait.
#[async_trait]
pub trait ArticleRepository: Interface + Send + Sync {
    /// Finds an article by ID.
    async fn find_by_id(&self, id: ArticleId) -> GazetteResult<Option<Article>>;

    /// Finds an article by its exact title.
    async fn find_by_title(&self, title: &str) -> GazetteResult<Option<Article>>;

    /// Finds an article together with its author.
    async fn find_with_author(&self, id: ArticleId) -> GazetteResult<Option<(Article, User)>>;

    /// Lists articles matching the filter, ordered by id ascending,
    /// together with the total match count ignoring pagination.
    async fn list_filtered(&self, filter: &ArticleFilter) -> GazetteResult<FilteredPage<Article>>;

    /// Saves a new article.
    async fn save(&self, article: &Article) -> GazetteResult<Article>;

    /// Applies a change set to an existing article and returns the result.
    async fn update(&self, id: ArticleId, changes: ArticleChanges) -> GazetteResult<Option<Article>>;

    /// Deletes an article by ID. Returns false when no row matched.
    async fn delete(&self, id: ArticleId) -> GazetteResult<bool>;

    /// Counts all articles.
    async fn count(&self) -> GazetteResult<u64>;
}

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> GazetteResult<Option<User>>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> GazetteResult<Option<User>>;

    /// Checks if an email exists.
    async fn exists_by_email(&self, email: &str) -> GazetteResult<bool>;

    /// Checks if a display name exists.
    async fn exists_by_display_name(&self, display_name: &str) -> GazetteResult<bool>;

    /// Saves a new user.
    async fn save(&self, user: &User) -> GazetteResult<User>;
}
