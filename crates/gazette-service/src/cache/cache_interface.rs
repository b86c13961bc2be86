//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use gazette_core::GazetteResult;
use shaku::Interface;
use std::time::Duration;

/// Fallback TTL for cached items when none is configured (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other cache backends.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> GazetteResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    ///
    /// The value write and its expiry are applied atomically.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> GazetteResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> GazetteResult<bool>;

    /// Check if a key exists in the cache.
    async fn exists(&self, key: &str) -> GazetteResult<bool>;

    /// Delete multiple keys matching a pattern.
    ///
    /// Returns the number of keys deleted.
    async fn delete_pattern(&self, pattern: &str) -> GazetteResult<u64>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;

    /// TTL callers should apply to cached writes.
    fn default_ttl(&self) -> Duration {
        DEFAULT_TTL
    }
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any serializable type.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> GazetteResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> GazetteResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
