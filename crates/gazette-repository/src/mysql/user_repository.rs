//! MySQL user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gazette_core::{Email, GazetteError, GazetteResult, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct MySqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String, // MySQL stores UUID as CHAR(36)
    email: String,
    display_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = GazetteError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| GazetteError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(User {
            id: UserId::from_uuid(id),
            email: Email::new_unchecked(row.email),
            display_name: row.display_name,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> GazetteResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> GazetteResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at, updated_at
            FROM users
            WHERE LOWER(email) = LOWER(?)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> GazetteResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE LOWER(email) = LOWER(?) LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn exists_by_display_name(&self, display_name: &str) -> GazetteResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE display_name = ? LIMIT 1")
                .bind(display_name)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn save(&self, user: &User) -> GazetteResult<User> {
        debug!("Saving new user: {}", user.display_name);

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.into_inner().to_string())
        .bind(user.email.as_str())
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| GazetteError::Internal("Failed to fetch inserted user".to_string()))
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
