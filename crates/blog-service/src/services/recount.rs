//! Aggregate recount
//!
//! Cached like/dislike counters are never adjusted in place. After every
//! reaction change they are re-derived from the stored reactions, so a retry
//! after a failure converges on the right numbers.

use blog_core::traits::ReactionTarget;
use blog_core::{ReactionKind, Snowflake};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Recomputes and stores the counters of one target kind
pub struct RecountService<'a> {
    ctx: &'a ServiceContext,
    target: &'a dyn ReactionTarget,
}

impl<'a> RecountService<'a> {
    pub fn new(ctx: &'a ServiceContext, target: &'a dyn ReactionTarget) -> Self {
        Self { ctx, target }
    }

    /// Counters for comments
    pub fn for_comments(ctx: &'a ServiceContext) -> Self {
        Self::new(ctx, ctx.comment_target())
    }

    /// Recount a target. A target that is gone, or disappears before the
    /// write lands, is not an error.
    #[instrument(skip(self), fields(target = self.target.kind()))]
    pub async fn recount(&self, target_id: Snowflake) -> ServiceResult<()> {
        if !self.target.exists(target_id).await? {
            debug!(target_id = %target_id, "Target gone, skipping recount");
            return Ok(());
        }

        // Two separate counts; a concurrent change in between heals on the next event
        let reactions = self.ctx.reaction_repo();
        let likes = reactions.count_by_status(target_id, ReactionKind::Like).await?;
        let dislikes = reactions
            .count_by_status(target_id, ReactionKind::Dislike)
            .await?;

        let stored = self
            .target
            .set_aggregate_counts(target_id, likes, dislikes)
            .await?;

        if stored {
            debug!(target_id = %target_id, likes, dislikes, "Recounted reactions");
        } else {
            debug!(
                target_id = %target_id,
                likes,
                dislikes,
                "Target vanished before its counters were stored"
            );
        }

        Ok(())
    }
}
