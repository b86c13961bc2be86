//! Redis-based cache implementation.

use super::{CacheInterface, DEFAULT_TTL};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use gazette_core::{GazetteError, GazetteResult};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
    /// TTL applied to cached writes.
    #[shaku(default = DEFAULT_TTL)]
    default_ttl: Duration,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            default_ttl: DEFAULT_TTL,
        }
    }

    /// Create a cache service with a custom default TTL.
    #[must_use]
    pub fn with_ttl(pool: Arc<Pool>, default_ttl: Duration) -> Self {
        Self {
            pool: Some(pool),
            default_ttl,
        }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            default_ttl: DEFAULT_TTL,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> GazetteResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| GazetteError::Cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(GazetteError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    async fn get_raw(&self, key: &str) -> GazetteResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| GazetteError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> GazetteResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        // MULTI/EXEC so the value and its expiry land together
        deadpool_redis::redis::pipe()
            .atomic()
            .set(key, value)
            .expire(key, ttl_secs as i64)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| GazetteError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> GazetteResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| GazetteError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> GazetteResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| GazetteError::Cache(format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }

    async fn delete_pattern(&self, pattern: &str) -> GazetteResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;

        // Use KEYS to find matching keys (SCAN would be better for production)
        let keys: Vec<String> = deadpool_redis::redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut conn)
            .await
            .map_err(|e| GazetteError::Cache(format!("Failed to scan keys: {}", e)))?;

        if keys.is_empty() {
            return Ok(0);
        }

        let deleted: i64 = conn
            .del(&keys)
            .await
            .map_err(|e| GazetteError::Cache(format!("Failed to delete keys: {}", e)))?;

        debug!("Deleted {} keys matching pattern '{}'", deleted, pattern);
        Ok(deleted as u64)
    }
}
