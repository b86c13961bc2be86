//! JWT claims extractor.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use gazette_core::{ErrorResponse, GazetteError};
use gazette_security::Claims;

/// Extractor for authenticated user claims.
///
/// Requires a valid Bearer token; the claims are placed into the request
/// extensions by the auth middleware.
pub struct AuthenticatedUser(pub Claims);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Error type for authentication extraction.
pub struct AuthError(GazetteError);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::UNAUTHORIZED);

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(error_response));

        (status, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AuthError(GazetteError::Unauthorized(
                    "Missing authorization header".to_string(),
                ))
            })?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AuthError(GazetteError::Unauthorized(
                "Invalid authorization format".to_string(),
            )));
        }

        // Claims are only present when the middleware accepted the token
        let claims = parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            AuthError(GazetteError::Unauthorized(
                "Invalid or expired token".to_string(),
            ))
        })?;

        Ok(AuthenticatedUser(claims))
    }
}
