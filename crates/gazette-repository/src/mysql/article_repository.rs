//! MySQL article repository implementation.

use crate::{traits::ArticleRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gazette_core::{
    Article, ArticleChanges, ArticleFilter, ArticleId, Email, FilteredPage, GazetteError,
    GazetteResult, User, UserId,
};
use shaku::Component;
use sqlx::{FromRow, QueryBuilder};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL article repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ArticleRepository)]
pub struct MySqlArticleRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlArticleRepository {
    /// Creates a new MySQL article repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an article.
#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String, // MySQL stores UUID as CHAR(36)
    title: String,
    description: String,
    content: String,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = GazetteError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| GazetteError::Internal(format!("Invalid UUID in database: {}", e)))?;
        let author_id = Uuid::parse_str(&row.author_id)
            .map_err(|e| GazetteError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Article {
            id: ArticleId::from_uuid(id),
            title: row.title,
            description: row.description,
            content: row.content,
            author_id: UserId::from_uuid(author_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Joined row for an article with its author's user record.
#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    id: String,
    title: String,
    description: String,
    content: String,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_email: String,
    user_display_name: String,
    user_password_hash: String,
    user_created_at: DateTime<Utc>,
    user_updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleWithAuthorRow> for (Article, User) {
    type Error = GazetteError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        let author_uuid = Uuid::parse_str(&row.author_id)
            .map_err(|e| GazetteError::Internal(format!("Invalid UUID in database: {}", e)))?;
        let author_id = UserId::from_uuid(author_uuid);

        let article = Article::try_from(ArticleRow {
            id: row.id,
            title: row.title,
            description: row.description,
            content: row.content,
            author_id: row.author_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;

        let author = User {
            id: author_id,
            email: Email::new_unchecked(row.user_email),
            display_name: row.user_display_name,
            password_hash: row.user_password_hash,
            created_at: row.user_created_at,
            updated_at: row.user_updated_at,
        };

        Ok((article, author))
    }
}

const SELECT_COLUMNS: &str =
    "id, title, description, content, author_id, created_at, updated_at";

/// Appends the filter's WHERE conditions to a query builder.
fn push_filter_conditions<'a>(
    builder: &mut QueryBuilder<'a, sqlx::MySql>,
    filter: &'a ArticleFilter,
) {
    let mut prefix = " WHERE ";
    if let Some(start) = filter.start_date {
        builder.push(prefix).push("created_at >= ").push_bind(start);
        prefix = " AND ";
    }
    if let Some(end) = filter.end_date {
        builder.push(prefix).push("created_at <= ").push_bind(end);
        prefix = " AND ";
    }
    if let Some(author_id) = filter.author_id {
        builder
            .push(prefix)
            .push("author_id = ")
            .push_bind(author_id.into_inner().to_string());
    }
}

#[async_trait]
impl ArticleRepository for MySqlArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> GazetteResult<Option<Article>> {
        debug!("Finding article by id: {}", id);

        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, description, content, author_id, created_at, updated_at
            FROM articles
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_title(&self, title: &str) -> GazetteResult<Option<Article>> {
        debug!("Finding article by title: {}", title);

        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, description, content, author_id, created_at, updated_at
            FROM articles
            WHERE title = ?
            "#,
        )
        .bind(title)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Article::try_from).transpose()
    }

    async fn find_with_author(&self, id: ArticleId) -> GazetteResult<Option<(Article, User)>> {
        debug!("Finding article with author: {}", id);

        let row = sqlx::query_as::<_, ArticleWithAuthorRow>(
            r#"
            SELECT a.id, a.title, a.description, a.content, a.author_id,
                   a.created_at, a.updated_at,
                   u.email AS user_email,
                   u.display_name AS user_display_name,
                   u.password_hash AS user_password_hash,
                   u.created_at AS user_created_at,
                   u.updated_at AS user_updated_at
            FROM articles a
            INNER JOIN users u ON u.id = a.author_id
            WHERE a.id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(<(Article, User)>::try_from).transpose()
    }

    async fn list_filtered(&self, filter: &ArticleFilter) -> GazetteResult<FilteredPage<Article>> {
        debug!(
            "Listing articles, offset: {}, limit: {}",
            filter.offset, filter.limit
        );

        let mut count_builder: QueryBuilder<sqlx::MySql> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        push_filter_conditions(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(self.pool.inner())
            .await?;

        let mut builder: QueryBuilder<sqlx::MySql> =
            QueryBuilder::new(format!("SELECT {} FROM articles", SELECT_COLUMNS));
        push_filter_conditions(&mut builder, filter);
        builder
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(filter.limit as i64)
            .push(" OFFSET ")
            .push_bind(filter.offset as i64);

        let rows: Vec<ArticleRow> = builder
            .build_query_as()
            .fetch_all(self.pool.inner())
            .await?;

        let articles: Vec<Article> = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FilteredPage::new(articles, total as u64))
    }

    async fn save(&self, article: &Article) -> GazetteResult<Article> {
        debug!("Saving new article: {}", article.title);

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO articles (id, title, description, content, author_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(article.id.into_inner().to_string())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.content)
        .bind(article.author_id.into_inner().to_string())
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(article.id)
            .await?
            .ok_or_else(|| GazetteError::Internal("Failed to fetch inserted article".to_string()))
    }

    async fn update(
        &self,
        id: ArticleId,
        changes: ArticleChanges,
    ) -> GazetteResult<Option<Article>> {
        debug!("Updating article: {}", id);

        let Some(mut article) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        article.apply(changes);

        sqlx::query(
            r#"
            UPDATE articles
            SET title = ?, description = ?, content = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.content)
        .bind(article.updated_at)
        .bind(id.into_inner().to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(Some(article))
    }

    async fn delete(&self, id: ArticleId) -> GazetteResult<bool> {
        debug!("Deleting article: {}", id);

        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> GazetteResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlArticleRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlArticleRepository").finish_non_exhaustive()
    }
}
