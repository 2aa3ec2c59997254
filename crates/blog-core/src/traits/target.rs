//! Reactable target port
//!
//! The reaction ledger and recount only need two things from the entity being
//! reacted to. Each target kind (comments today) supplies an implementation.

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::value_objects::Snowflake;

#[async_trait]
pub trait ReactionTarget: Send + Sync {
    /// Short name of the target kind, used in logs and not-found errors
    fn kind(&self) -> &'static str;

    /// Whether a live target with this id exists
    async fn exists(&self, target_id: Snowflake) -> RepoResult<bool>;

    /// Store recomputed counters. Returns false if the target is gone.
    async fn set_aggregate_counts(
        &self,
        target_id: Snowflake,
        likes_count: i64,
        dislikes_count: i64,
    ) -> RepoResult<bool>;
}
