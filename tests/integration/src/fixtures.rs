//! Test fixtures and data generators
//!
//! Request bodies and the response shapes tests read back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

impl CreateCommentRequest {
    pub fn unique() -> Self {
        Self {
            content: format!("integration test comment number {}", unique_suffix()),
        }
    }
}

/// Like status request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusRequest {
    pub like_status: String,
}

impl LikeStatusRequest {
    pub fn new(status: &str) -> Self {
        Self {
            like_status: status.to_string(),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub login: String,
    pub email: String,
    pub created_at: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub commentator_info: CommentatorInfo,
    pub created_at: String,
    pub likes_info: LikesInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfo {
    pub user_id: String,
    pub user_login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesInfo {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
