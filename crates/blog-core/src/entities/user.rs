//! User entity - a blog account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Blog user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, login: String, email: String) -> Self {
        Self {
            id,
            login,
            email,
            created_at: Utc::now(),
        }
    }
}
