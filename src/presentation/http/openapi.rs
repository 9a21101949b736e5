// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::accounts::register,
        crate::presentation::http::controllers::accounts::login,
        crate::presentation::http::controllers::accounts::profile,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_my_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::edit_article,
        crate::presentation::http::controllers::articles::change_article_status,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::accounts::RegisterRequest,
            crate::presentation::http::controllers::accounts::LoginRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::EditArticleRequest,
            crate::presentation::http::controllers::articles::ChangeStatusRequest,
            crate::application::dto::AccountDto,
            crate::application::dto::AuthenticationDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::EditedArticleDto,
            crate::application::dto::ArticleStatusDto
        )
    ),
    tags(
        (name = "Accounts", description = "Registration, login and profile"),
        (name = "Articles", description = "Article authoring and lifecycle"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Scriptorium API",
        description = "Article authoring backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        if let Ok(url) = env::var("PUBLIC_API_URL") {
            let sanitized = url.trim().trim_end_matches('/').to_string();
            if !sanitized.is_empty() {
                openapi.servers = Some(vec![Server::new(sanitized)]);
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
