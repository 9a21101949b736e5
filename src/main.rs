use anyhow::Result;
use scriptorium_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use scriptorium_core::config::AppConfig;
use scriptorium_core::domain::{
    account::AccountRepository,
    article::{ArticleReadRepository, ArticleWriteRepository},
};
use scriptorium_core::infrastructure::{
    database,
    repositories::{
        PostgresAccountRepository, PostgresArticleReadRepository, PostgresArticleWriteRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use scriptorium_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone(), config.utc_offset()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool, config.utc_offset()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.utc_offset()));

    let services = Arc::new(ApplicationServices::new(
        account_repo,
        article_write_repo,
        article_read_repo,
        password_hasher,
        token_manager,
        clock,
    ));

    let state = HttpState {
        services,
        request_timeout: config.request_timeout(),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, utc_offset = %config.utc_offset(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
