//! # Gazette Server
//!
//! Main entry point for the Gazette article service.

use gazette_config::{ConfigLoader, ObservabilityConfig};
use gazette_core::{GazetteResult, HealthCheck};
use gazette_repository::{DatabasePool, DatabasePoolInterface, MySqlUserRepository};
use gazette_rest::{create_router, AppState};
use gazette_security::{PasswordHasher, TokenProvider};
use gazette_server::di::{build_app_module, ServiceResolver};
use gazette_service::AuthServiceImpl;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Environment variables from .env take effect before config loading
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> GazetteResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config.observability);

    info!("Starting Gazette server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    // Connect to MySQL and apply pending migrations
    let db_pool = DatabasePool::connect(&config.database).await?;
    db_pool.run_migrations().await?;

    // Build the DI module for the cached article stack
    let module = build_app_module(&db_pool, &config.redis)?;
    let article_service = module.article_service();

    // Auth stack is wired directly
    let security_config = Arc::new(config.security.clone());
    let user_repository = Arc::new(MySqlUserRepository::new(module.database_pool()));
    let auth_service = Arc::new(AuthServiceImpl::new(
        user_repository,
        Arc::new(PasswordHasher::new()),
        security_config.clone(),
    ));

    let token_provider = Arc::new(TokenProvider::new(security_config));

    let app_state = AppState::new(article_service, auth_service);
    let health_checks: Vec<Arc<dyn HealthCheck>> = vec![Arc::new(db_pool)];
    let router = create_router(app_state, token_provider, &config.server, health_checks);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| gazette_core::GazetteError::Internal(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| gazette_core::GazetteError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(observability: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},gazette=debug,tower_http=debug",
            observability.log_level
        ))
    });

    if observability.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
