// tests/support/helpers.rs
use super::builders::default_accounts;
use super::mocks::{
    DummyPasswordHasher, DummyTokenManager, FixedClock, InMemoryAccountRepo, InMemoryArticleRepo,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use scriptorium_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use scriptorium_core::domain::{
    account::{AccountEmail, AccountRepository},
    article::{Article, ArticleReadRepository, ArticleWriteRepository},
};
use scriptorium_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

pub const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Services wired to in-memory fakes, with handles kept for inspection.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub accounts: Arc<InMemoryAccountRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub clock: Arc<FixedClock>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let accounts = Arc::new(InMemoryAccountRepo::with_accounts(default_accounts()));
        let articles = Arc::new(InMemoryArticleRepo::with_articles(articles));
        let clock = Arc::new(FixedClock::new());

        let services = build_services(
            accounts.clone(),
            articles.clone(),
            articles.clone(),
            clock.clone(),
        );

        Self {
            services,
            accounts,
            articles,
            clock,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState {
            services: Arc::clone(&self.services),
            request_timeout: TEST_REQUEST_TIMEOUT,
        }
    }

    pub fn router(&self) -> axum::Router {
        router_for_state(self.state())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_services(
    accounts: Arc<dyn AccountRepository>,
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);

    Arc::new(ApplicationServices::new(
        accounts,
        article_write,
        article_read,
        password_hasher,
        token_manager,
        clock,
    ))
}

pub fn router_for_state(state: HttpState) -> axum::Router {
    build_router(state, &["http://localhost:3000".to_string()])
}

pub async fn make_test_router() -> axum::Router {
    TestContext::new().router()
}

pub fn email(raw: &str) -> AccountEmail {
    AccountEmail::new(raw).unwrap()
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
