//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{comments, health, reactions, users};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(comment_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/@me",
        get(users::get_current_user).delete(users::delete_current_user),
    )
}

/// Comment and reaction routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/comments", post(comments::create_comment))
        .route(
            "/comments/:comment_id",
            get(comments::get_comment).delete(comments::delete_comment),
        )
        .route(
            "/comments/:comment_id/like-status",
            put(reactions::update_like_status),
        )
}
