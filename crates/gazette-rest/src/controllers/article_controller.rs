//! Article controller.

use crate::{
    extractors::{ArticleFilterQuery, AuthenticatedUser, ValidatedJson},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use gazette_core::{ArticleId, GazetteError};
use gazette_service::{
    ArticleListResponse, ArticleResponse, CreateArticleRequest, UpdateArticleRequest,
};
use tracing::debug;

/// Creates the article router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/:id",
            get(get_article).patch(update_article).delete(delete_article),
        )
}

/// List articles matching the filter query.
#[utoipa::path(
    get,
    path = "/articles",
    tag = "articles",
    params(ArticleFilterQuery),
    responses(
        (status = 200, description = "Filtered page of articles", body = ArticleListResponse)
    )
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleFilterQuery>,
) -> ApiResult<ArticleListResponse> {
    debug!("List articles request");

    let response = state.article_service.list_articles(query.into()).await?;
    ok(response)
}

/// Get a single article by id.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    tag = "articles",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = ArticleResponse),
        (status = 404, description = "Article does not exist")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ArticleResponse> {
    debug!("Get article request: {}", id);

    let article_id = parse_article_id(&id)?;
    let response = state.article_service.get_article(article_id).await?;
    ok(response)
}

/// Create a new article.
#[utoipa::path(
    post,
    path = "/articles",
    tag = "articles",
    request_body = CreateArticleRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Article created", body = ArticleResponse),
        (status = 409, description = "Title already taken"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ArticleResponse>>), AppError> {
    debug!("Create article request: {}", request.title);

    let author = user.user_id().ok_or_else(|| {
        AppError(GazetteError::Internal("Missing user id in token".to_string()))
    })?;

    let response = state.article_service.create_article(author, request).await?;
    Ok(created(response))
}

/// Apply a partial update to an article.
#[utoipa::path(
    patch,
    path = "/articles/{id}",
    tag = "articles",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated article", body = ArticleResponse),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article does not exist"),
        (status = 409, description = "Title already taken")
    )
)]
pub async fn update_article(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<ArticleResponse> {
    debug!("Update article request: {}", id);

    let article_id = parse_article_id(&id)?;
    let actor = user.user_id().ok_or_else(|| {
        AppError(GazetteError::Internal("Missing user id in token".to_string()))
    })?;

    let response = state
        .article_service
        .update_article(article_id, actor, request)
        .await?;
    ok(response)
}

/// Delete an article.
#[utoipa::path(
    delete,
    path = "/articles/{id}",
    tag = "articles",
    params(("id" = String, Path, description = "Article id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article does not exist")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete article request: {}", id);

    let article_id = parse_article_id(&id)?;
    let actor = user.user_id().ok_or_else(|| {
        AppError(GazetteError::Internal("Missing user id in token".to_string()))
    })?;

    state.article_service.delete_article(article_id, actor).await?;
    Ok(no_content())
}

/// Parse an article id from a path segment.
fn parse_article_id(id: &str) -> Result<ArticleId, AppError> {
    ArticleId::parse(id)
        .map_err(|_| AppError(GazetteError::Validation(format!("Invalid article id: {}", id))))
}
