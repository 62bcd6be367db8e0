//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use conduit_common::{AppConfig, AppError, TokenService};
use conduit_db::{
    create_pool, PgArticleRepository, PgCommentRepository, PgFollowRepository, PgTagRepository,
    PgUserRepository,
};
use conduit_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let router = apply_middleware(create_router(), &cors, is_production).merge(health_routes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("connecting to PostgreSQL...");
    let db_config = conduit_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply migrations; constraint names in the schema are part of the
    // persistence contract, so the binary that relies on them pins them.
    conduit_db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("database migrations applied");

    // Create token service
    let token_service = Arc::new(TokenService::new(
        &config.jwt.secret,
        config.jwt.ttl_seconds,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let article_repo = Arc::new(PgArticleRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let follow_repo = Arc::new(PgFollowRepository::new(pool.clone()));
    let tag_repo = Arc::new(PgTagRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .article_repo(article_repo)
        .comment_repo(comment_repo)
        .follow_repo(follow_repo)
        .tag_repo(tag_repo)
        .token_service(token_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("failed to bind to {addr}: {e}")))?;

    info!("server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
