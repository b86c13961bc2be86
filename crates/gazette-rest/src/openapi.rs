//! OpenAPI documentation configuration.

use gazette_core::{ArticleId, ErrorResponse, FieldError, UserId};
use gazette_service::{
    ArticleListResponse, ArticleResponse, AuthResponse, CreateArticleRequest, LoginRequest,
    RegisterRequest, UpdateArticleRequest, UserResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Gazette API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gazette API",
        version = "1.0.0",
        description = "RESTful API for the Gazette article service",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Auth endpoints
        crate::controllers::auth_controller::register,
        crate::controllers::auth_controller::login,
        crate::controllers::auth_controller::get_current_user,
        // Article endpoints
        crate::controllers::article_controller::list_articles,
        crate::controllers::article_controller::get_article,
        crate::controllers::article_controller::create_article,
        crate::controllers::article_controller::update_article,
        crate::controllers::article_controller::delete_article,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            UserId,
            ArticleId,
            ErrorResponse,
            FieldError,
            // Auth DTOs
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UserResponse,
            // Article DTOs
            CreateArticleRequest,
            UpdateArticleRequest,
            ArticleResponse,
            ArticleListResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "articles", description = "Article management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}
