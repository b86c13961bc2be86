//! Dependency injection module using Shaku.

use deadpool_redis::Pool;
use gazette_config::RedisConfig;
use gazette_core::{GazetteError, GazetteResult};
use gazette_repository::{DatabasePool, DatabasePoolInterface, MySqlArticleRepository};
use gazette_service::{
    ArticleService, ArticleServiceComponent, RedisCacheService, RedisCacheServiceParameters,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            MySqlArticleRepository,
            RedisCacheService,
            ArticleServiceComponent,
        ],
        providers = [],
    }
}

/// Creates the Redis connection pool, or `None` when caching is disabled.
pub fn create_cache_pool(redis_config: &RedisConfig) -> GazetteResult<Option<Arc<Pool>>> {
    if !redis_config.enabled {
        return Ok(None);
    }

    let cfg = deadpool_redis::Config::from_url(&redis_config.url);
    let pool = cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| GazetteError::Cache(format!("Failed to create Redis pool: {}", e)))?;
    Ok(Some(Arc::new(pool)))
}

/// Builds the application module from an established database pool and
/// the Redis configuration.
pub fn build_app_module(
    db_pool: &DatabasePool,
    redis_config: &RedisConfig,
) -> GazetteResult<Arc<AppModule>> {
    let cache_pool = create_cache_pool(redis_config)?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(gazette_repository::DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
            default_ttl: redis_config.cache_ttl(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving services from the application module.
pub trait ServiceResolver {
    /// Resolves the article service.
    fn article_service(&self) -> Arc<dyn ArticleService>;

    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ServiceResolver for AppModule {
    fn article_service(&self) -> Arc<dyn ArticleService> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
