// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError, status::ApiStatus};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: ApiStatus,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = ApiStatus::from(&err);
        let message = match err {
            ApplicationError::Domain(domain_err) => domain_err.to_string(),
            ApplicationError::Validation(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::Conflict(msg)
            | ApplicationError::Unauthorized(msg)
            | ApplicationError::Forbidden(msg)
            | ApplicationError::Infrastructure(msg) => msg,
        };
        Self { status, message }
    }

    pub fn http_status(&self) -> StatusCode {
        status_code(self.status)
    }
}

fn status_code(status: ApiStatus) -> StatusCode {
    StatusCode::from_u16(status.http_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Successful JSON body tagged with its `OK` or `Created` status.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: ApiStatus,
    body: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: ApiStatus::Ok,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: ApiStatus::Created,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (status_code(self.status), Json(self.body)).into_response()
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let payload = ErrorResponse {
            error: self.status.to_string(),
            message: self.message,
        };
        (status, Json(payload)).into_response()
    }
}

/// Body of every non-success response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// One of `InvalidPayload`, `Unauthorized`, `Forbidden`, `NotFound`,
    /// `Conflict`, `UnexpectedError`.
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
