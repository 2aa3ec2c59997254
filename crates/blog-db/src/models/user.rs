//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
