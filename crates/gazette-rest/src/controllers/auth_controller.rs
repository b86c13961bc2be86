//! Authentication controller.

use crate::{
    extractors::{AuthenticatedUser, ValidatedJson},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use gazette_service::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", axum::routing::get(get_current_user))
}

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created and logged in", body = AuthResponse),
        (status = 409, description = "Email or display name already taken"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<AuthResponse> {
    debug!("Registration request for '{}'", request.display_name);

    let response = state.auth_service.register(request).await?;
    ok(response)
}

/// Login with email and password.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<AuthResponse> {
    debug!("Login request for '{}'", request.email);

    let response = state.auth_service.login(request).await?;
    ok(response)
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<UserResponse> {
    debug!("Get current user: {}", user.display_name);

    let response = state.auth_service.get_current_user(&user.0).await?;
    ok(response)
}
