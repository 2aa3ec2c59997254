//! Reaction ledger
//!
//! Applies a user's like/dislike/none intent to a target. At most one
//! reaction row exists per (user, target); after any change the target's
//! counters are recounted.

use blog_core::entities::Reaction;
use blog_core::traits::ReactionTarget;
use blog_core::{DomainError, LikeStatus, ReactionKind, Snowflake, Viewer};
use chrono::Utc;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::recount::RecountService;

/// What a call to [`ReactionLedger::set_reaction`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    Created(ReactionKind),
    Updated(ReactionKind),
    Removed,
    /// Nothing to do: re-applying the current status, or removing a missing reaction
    Unchanged,
}

impl ReactionChange {
    #[inline]
    pub fn is_noop(self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Reaction ledger for one target kind
pub struct ReactionLedger<'a> {
    ctx: &'a ServiceContext,
    target: &'a dyn ReactionTarget,
}

impl<'a> ReactionLedger<'a> {
    /// Ledger for comment reactions
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self::with_target(ctx, ctx.comment_target())
    }

    pub fn with_target(ctx: &'a ServiceContext, target: &'a dyn ReactionTarget) -> Self {
        Self { ctx, target }
    }

    /// Set a user's reaction on a target
    #[instrument(skip(self), fields(target = self.target.kind()))]
    pub async fn set_reaction(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        status: LikeStatus,
    ) -> ServiceResult<ReactionChange> {
        if !self.target.exists(target_id).await? {
            return Err(ServiceError::not_found(self.target.kind(), target_id));
        }

        let reactions = self.ctx.reaction_repo();
        let existing = reactions.find(user_id, target_id).await?;

        let change = match (existing.map(|r| r.kind), status.reaction()) {
            (None, None) => ReactionChange::Unchanged,
            (Some(current), Some(wanted)) if current == wanted => ReactionChange::Unchanged,
            (None, Some(kind)) => {
                match reactions.create(&Reaction::new(user_id, target_id, kind)).await {
                    Ok(()) => ReactionChange::Created(kind),
                    // Lost an insert race with an overlapping request from the same user
                    Err(DomainError::ReactionAlreadyExists) => {
                        return Err(ServiceError::internal(format!(
                            "reaction of user {user_id} on {target_id} was created concurrently"
                        )));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            (Some(_), None) => {
                reactions.delete(user_id, target_id).await?;
                ReactionChange::Removed
            }
            (Some(_), Some(kind)) => {
                let update = reactions.update_status(user_id, target_id, kind).await?;
                if !update.matched {
                    return Err(ServiceError::internal(format!(
                        "reaction of user {user_id} on {target_id} vanished during status update"
                    )));
                }
                if !reactions
                    .update_timestamp(user_id, target_id, Utc::now())
                    .await?
                {
                    return Err(ServiceError::internal(format!(
                        "reaction of user {user_id} on {target_id} vanished during timestamp update"
                    )));
                }
                ReactionChange::Updated(kind)
            }
        };

        if change.is_noop() {
            return Ok(change);
        }

        info!(
            user_id = %user_id,
            target_id = %target_id,
            status = %status,
            ?change,
            "Reaction changed"
        );

        // The reaction write has already landed; a failed recount still fails the call
        RecountService::new(self.ctx, self.target)
            .recount(target_id)
            .await
            .map_err(|e| ServiceError::internal(format!("recount of {target_id} failed: {e}")))?;

        Ok(change)
    }

    /// The status a viewer sees on a target; anonymous viewers always see `None`
    #[instrument(skip(self))]
    pub async fn viewer_status(
        &self,
        viewer: Viewer,
        target_id: Snowflake,
    ) -> ServiceResult<LikeStatus> {
        let Some(user_id) = viewer.user_id() else {
            return Ok(LikeStatus::None);
        };

        let reaction = self.ctx.reaction_repo().find(user_id, target_id).await?;
        Ok(LikeStatus::from(reaction.map(|r| r.kind)))
    }
}
