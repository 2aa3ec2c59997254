//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{Comment, CommentatorInfo, LikesInfo, User};

use super::responses::{
    CommentViewResponse, CommentatorInfoResponse, LikesInfoResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&CommentatorInfo> for CommentatorInfoResponse {
    fn from(info: &CommentatorInfo) -> Self {
        Self {
            user_id: info.user_id.to_string(),
            user_login: info.user_login.clone(),
        }
    }
}

impl From<LikesInfo> for LikesInfoResponse {
    fn from(info: LikesInfo) -> Self {
        Self {
            likes_count: info.likes_count,
            dislikes_count: info.dislikes_count,
            my_status: info.my_status,
        }
    }
}

impl CommentViewResponse {
    /// Render a comment with the given viewer's likes info
    pub fn new(comment: &Comment, likes_info: LikesInfo) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            content: comment.content.clone(),
            commentator_info: CommentatorInfoResponse::from(&comment.commentator),
            created_at: comment.created_at,
            likes_info: LikesInfoResponse::from(likes_info),
        }
    }
}
