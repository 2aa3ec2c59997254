//! Reaction entity <-> model mapper

use blog_core::entities::Reaction;
use blog_core::error::DomainError;
use blog_core::value_objects::{ReactionKind, Snowflake};
use chrono::{DateTime, Utc};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
///
/// Fails only if the row holds a status the CHECK constraint should have rejected.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = ReactionKind::from_db_str(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("unexpected reaction status '{}'", model.status))
        })?;

        Ok(Reaction {
            user_id: Snowflake::new(model.user_id),
            target_id: Snowflake::new(model.target_id),
            kind,
            created_at: model.created_at,
        })
    }
}

/// Column values for inserting a reaction
pub struct ReactionInsert {
    pub user_id: i64,
    pub target_id: i64,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

impl ReactionInsert {
    pub fn new(reaction: &Reaction) -> Self {
        Self {
            user_id: reaction.user_id.into_inner(),
            target_id: reaction.target_id.into_inner(),
            status: reaction.kind.as_db_str(),
            created_at: reaction.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(status: &str) -> ReactionModel {
        ReactionModel {
            user_id: 1,
            target_id: 2,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let reaction = Reaction::try_from(model("dislike")).unwrap();
        assert_eq!(reaction.user_id, Snowflake::new(1));
        assert_eq!(reaction.target_id, Snowflake::new(2));
        assert_eq!(reaction.kind, ReactionKind::Dislike);
    }

    #[test]
    fn test_unknown_status_is_a_database_error() {
        let err = Reaction::try_from(model("None")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[test]
    fn test_insert_values() {
        let reaction = Reaction::new(Snowflake::new(3), Snowflake::new(4), ReactionKind::Like);
        let insert = ReactionInsert::new(&reaction);
        assert_eq!(insert.user_id, 3);
        assert_eq!(insert.target_id, 4);
        assert_eq!(insert.status, "like");
    }
}
