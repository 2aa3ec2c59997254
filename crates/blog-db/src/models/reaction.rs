//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: i64,
    pub target_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Row counts reported by a status update (from query)
#[derive(Debug, Clone, Copy, FromRow)]
pub struct StatusUpdateModel {
    pub matched: i64,
    pub modified: i64,
}
