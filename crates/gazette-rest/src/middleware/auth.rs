//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use gazette_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    /// Creates a new middleware state.
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Authentication middleware that validates JWT tokens.
///
/// Extracts the Bearer token from the Authorization header, validates it,
/// and adds the claims to the request extensions. Requests without a valid
/// token pass through without claims; handlers decide whether auth is
/// required via the `AuthenticatedUser` extractor.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            match state.token_provider.validate_token(token) {
                Ok(claims) => {
                    debug!("Authenticated user: {}", claims.display_name);
                    request.extensions_mut().insert(claims);
                }
                Err(e) => {
                    debug!("Token validation failed: {}", e);
                }
            }
        }
    }

    Ok(next.run(request).await)
}
