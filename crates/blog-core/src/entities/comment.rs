//! Comment entity - a user's comment under a post, with cached reaction counters

use chrono::{DateTime, Utc};

use crate::value_objects::{LikeStatus, Snowflake};

/// Comment entity
///
/// `likes_count` and `dislikes_count` are derived from the reaction rows and
/// only ever written by a recount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub content: String,
    pub commentator: CommentatorInfo,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Author reference embedded in a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentatorInfo {
    pub user_id: Snowflake,
    pub user_login: String,
}

impl Comment {
    /// Create a new comment with zeroed counters
    pub fn new(
        id: Snowflake,
        post_id: Snowflake,
        content: String,
        commentator: CommentatorInfo,
    ) -> Self {
        Self {
            id,
            post_id,
            content,
            commentator,
            likes_count: 0,
            dislikes_count: 0,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.commentator.user_id == user_id
    }

    /// Counters as seen by a viewer whose own status is `my_status`
    pub fn likes_info(&self, my_status: LikeStatus) -> LikesInfo {
        LikesInfo {
            likes_count: self.likes_count,
            dislikes_count: self.dislikes_count,
            my_status,
        }
    }
}

/// Aggregate counters plus the viewer's own status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikesInfo {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: LikeStatus,
}
