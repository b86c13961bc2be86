//! Caching layer for the service tier.

pub mod cache_interface;
pub mod cache_keys;
pub mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface, DEFAULT_TTL};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters};
