//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use blog_common::{AppConfig, AppError, JwtService};
use blog_core::SnowflakeGenerator;
use blog_db::{
    create_pool, run_migrations, DatabaseConfig, PgCommentRepository, PgReactionRepository,
    PgUserRepository,
};
use blog_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the basic stack only, so they are never rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::with_url(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
    }

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create Snowflake generator
    if config.snowflake.worker_id >= 1024 {
        return Err(AppError::Config(format!(
            "WORKER_ID must be < 1024, got {}",
            config.snowflake.worker_id
        )));
    }
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .comment_repo(comment_repo)
        .reaction_repo(reaction_repo)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {e}", config.api.address())))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
