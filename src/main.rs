//! Forum API server binary.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use forum_api::adapters::http::ErrorPolicy;
use forum_api::adapters::{
    forum_router, run_migrations, ForumHandlers, InMemoryCommentRepository, InMemoryForumStore,
    InMemoryReplyRepository, InMemoryThreadRepository, JwtSessionValidator,
    PostgresCommentRepository, PostgresReplyRepository, PostgresThreadRepository, RouterOptions,
    UuidIdGenerator,
};
use forum_api::config::{AppConfig, DatabaseConfig};
use forum_api::ports::{CommentRepository, IdGenerator, ReplyRepository, ThreadRepository};

type Repositories = (
    Arc<dyn ThreadRepository>,
    Arc<dyn CommentRepository>,
    Arc<dyn ReplyRepository>,
);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());
    let (threads, comments, replies) = build_repositories(&config.database, ids).await?;

    let handlers = ForumHandlers::from_repositories(
        threads,
        comments,
        replies,
        ErrorPolicy::new(config.features.verbose_errors),
    );
    let validator = Arc::new(JwtSessionValidator::from_secret(
        config.auth.access_token_key.clone(),
        config.auth.access_token_age_secs,
    ));
    let options = RouterOptions {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
        enable_tracing: config.features.enable_tracing,
    };
    let app = forum_router(handlers, validator, options);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "forum api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("forum api stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let (json, pretty) = if config.is_production() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer().compact()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

async fn build_repositories(
    database: &DatabaseConfig,
    ids: Arc<dyn IdGenerator>,
) -> Result<Repositories, Box<dyn std::error::Error>> {
    if database.is_in_memory() {
        info!("using in-memory forum store");
        let store = Arc::new(InMemoryForumStore::new(ids));
        return Ok((
            Arc::new(InMemoryThreadRepository::new(store.clone())),
            Arc::new(InMemoryCommentRepository::new(store.clone())),
            Arc::new(InMemoryReplyRepository::new(store)),
        ));
    }

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .max_lifetime(database.max_lifetime())
        .connect(&database.url)
        .await?;
    info!(max_connections = database.max_connections, "connected to postgres");

    if database.run_migrations {
        run_migrations(&pool).await?;
        info!("migrations applied");
    }

    Ok((
        Arc::new(PostgresThreadRepository::new(pool.clone(), ids.clone())),
        Arc::new(PostgresCommentRepository::new(pool.clone(), ids.clone())),
        Arc::new(PostgresReplyRepository::new(pool, ids)),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
