//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use gazette_core::GazetteError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `GAZETTE_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, GazetteError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, GazetteError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), GazetteError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, GazetteError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("GAZETTE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (GAZETTE_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("GAZETTE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_gazette_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_gazette_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), GazetteError> {
        if config.app.environment == "production"
            && config.security.jwt_secret == "change-me-in-production"
        {
            warn!("Using default JWT secret in production! This is a security risk.");
        }

        if config.database.url.is_empty() {
            return Err(GazetteError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if config.redis.enabled && config.redis.url.is_empty() {
            return Err(GazetteError::Configuration(
                "Redis URL is required when the cache is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_error_to_gazette_error(err: ConfigError) -> GazetteError {
    GazetteError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;

    #[tokio::test]
    async fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert!(config.redis.enabled);
        assert_eq!(config.redis.cache_ttl_secs, 300);
    }

    #[tokio::test]
    async fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_rejects_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_rejects_empty_redis_url_when_enabled() {
        let mut config = AppConfig::default();
        config.redis.url = String::new();
        assert!(ConfigLoader::validate_config(&config).is_err());

        config.redis.enabled = false;
        assert!(ConfigLoader::validate_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_loads_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
