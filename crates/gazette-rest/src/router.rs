//! Main application router.

use crate::{
    controllers::{article_controller, auth_controller, health_controller},
    middleware::{auth_middleware, logging_middleware, AuthMiddlewareState},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use gazette_config::ServerConfig;
use gazette_core::HealthCheck;
use gazette_security::TokenProvider;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
///
/// Article listing and reads are public; mutations and `/auth/me` require
/// a valid Bearer token.
pub fn create_router(
    state: AppState,
    token_provider: Arc<TokenProvider>,
    server_config: &ServerConfig,
    health_checks: Vec<Arc<dyn HealthCheck>>,
) -> Router {
    let cors = create_cors_layer(server_config);
    let auth_state = AuthMiddlewareState::new(token_provider);

    let api_router = Router::new()
        .nest("/auth", auth_controller::router())
        .nest("/articles", article_controller::router())
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(state);

    let router = Router::new()
        // Health endpoints (no auth required)
        .merge(health_controller::router(health_checks))
        // API v1
        .nest("/api/v1", api_router)
        // Swagger UI and the OpenAPI document
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Gazette API v1"
}
