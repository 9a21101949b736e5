// src/presentation/http/middleware/deadline.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::{error::HttpError, state::HttpState};
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Bounds handler execution by `HttpState::request_timeout`. On expiry the
/// handler future is dropped, abandoning any query it has in flight.
pub async fn deadline_middleware(
    Extension(state): Extension<HttpState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match tokio::time::timeout(state.request_timeout, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%method, %path, timeout = ?state.request_timeout, "request cancelled");
            HttpError::from_error(ApplicationError::infrastructure("request cancelled"))
                .into_response()
        }
    }
}
