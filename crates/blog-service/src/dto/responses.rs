//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use blog_core::LikeStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Current user's own profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A comment as rendered for one viewer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentViewResponse {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub commentator_info: CommentatorInfoResponse,
    pub created_at: DateTime<Utc>,
    pub likes_info: LikesInfoResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfoResponse {
    pub user_id: String,
    pub user_login: String,
}

/// Aggregate counters plus the viewer's own status
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesInfoResponse {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: LikeStatus,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
