//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub user_id: i64,
    pub user_login: String,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
