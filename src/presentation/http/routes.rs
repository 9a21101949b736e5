// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{accounts, articles},
    middleware::deadline_middleware,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/accounts/register", post(accounts::register))
        .route("/api/v1/accounts/login", post(accounts::login))
        .route("/api/v1/accounts/me", get(accounts::profile))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/mine", get(articles::list_my_articles))
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article).put(articles::edit_article),
        )
        .route(
            "/api/v1/articles/{id}/status",
            put(articles::change_article_status),
        )
        .layer(middleware::from_fn(deadline_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
