// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{ChangeArticleStatusCommand, CreateArticleCommand, EditArticleCommand},
    dto::{ArticleDto, ArticleStatusDto, ArticleSummaryDto, EditedArticleDto},
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ApiResponse, ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub subtitle: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EditArticleRequest {
    pub title: String,
    pub subtitle: String,
    pub content: String,
}

/// Requested lifecycle target. Only `PUBLISHED` and `ARCHIVED` are accepted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeStatusRequest {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "All articles ordered by id.", body = [ArticleSummaryDto]),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<ApiResponse<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_public()
        .await
        .into_http()
        .map(ApiResponse::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/mine",
    responses(
        (status = 200, description = "Articles written by the caller.", body = [ArticleSummaryDto]),
        (status = 400, description = "Caller has no account.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_my_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
) -> HttpResult<ApiResponse<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_own(&account.email)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Draft created.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
    };

    let article = state
        .services
        .article_commands
        .create_article(&account.email, command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(article))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = EditArticleRequest,
    responses(
        (status = 200, description = "Article text replaced.", body = EditedArticleDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Article missing or owned by someone else.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn edit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<EditArticleRequest>,
) -> HttpResult<ApiResponse<EditedArticleDto>> {
    let command = EditArticleCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .edit_article(&account.email, command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/status",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ChangeStatusRequest,
    responses(
        (status = 200, description = "Status changed.", body = ArticleStatusDto),
        (status = 400, description = "Unknown or unsupported target status.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Transition not allowed or article not owned.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn change_article_status(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ChangeStatusRequest>,
) -> HttpResult<ApiResponse<ArticleStatusDto>> {
    let command = ChangeArticleStatusCommand {
        id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .change_status(&account.email, command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}
