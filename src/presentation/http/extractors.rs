// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAccount, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Caller identity taken from a verified `Authorization: Bearer` token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAccount);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts
            .extensions
            .get::<HttpState>()
            .cloned()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let account = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(account))
    }
}

/// JSON body whose decode failures are reported as `InvalidPayload`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// Path parameters whose parse failures are reported as `InvalidPayload`.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}
