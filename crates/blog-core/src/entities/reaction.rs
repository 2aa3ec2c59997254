//! Reaction entity - a user's like or dislike on a target

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionKind, Snowflake};

/// One user's reaction to one target. At most one exists per (user, target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Snowflake,
    pub target_id: Snowflake,
    pub kind: ReactionKind,
    /// Time of the last status change, not of the first reaction
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(user_id: Snowflake, target_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            user_id,
            target_id,
            kind,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is(&self, kind: ReactionKind) -> bool {
        self.kind == kind
    }
}
