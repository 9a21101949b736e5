// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::accounts::{LoginCommand, RegisterAccountCommand},
    dto::{AccountDto, AuthenticationDto},
};
use crate::presentation::http::error::{ApiResponse, ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created.", body = AccountDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse)
    ),
    security(()),
    tag = "Accounts"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> HttpResult<ApiResponse<AccountDto>> {
    let command = RegisterAccountCommand {
        email: payload.email,
        password: payload.password,
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    let account = state
        .services
        .account_commands
        .register(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(account))
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued.", body = AuthenticationDto),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    security(()),
    tag = "Accounts"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<ApiResponse<AuthenticationDto>> {
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .account_commands
        .login(command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/accounts/me",
    responses(
        (status = 200, description = "Profile of the caller.", body = AccountDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
) -> HttpResult<ApiResponse<AccountDto>> {
    state
        .services
        .account_queries
        .profile(&account.email)
        .await
        .into_http()
        .map(ApiResponse::ok)
}
