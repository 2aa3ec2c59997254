//! User service
//!
//! Handles the current user's profile and account removal.

use blog_core::entities::User;
use blog_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::recount::RecountService;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))
    }

    /// Delete a user and everything they reacted with
    ///
    /// Reactions go first, each followed by a recount of its comment; the
    /// user row is removed last. A failure part way leaves the user in place,
    /// so retrying picks up whatever reactions remain.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.get_user_entity(user_id).await?;

        let reactions = self.ctx.reaction_repo();
        let recount = RecountService::for_comments(self.ctx);
        let targets = reactions.find_targets_by_user(user_id).await?;

        for target_id in &targets {
            reactions.delete(user_id, *target_id).await?;
            recount.recount(*target_id).await?;
        }

        // Sweep reactions added while the loop ran
        let removed = reactions.delete_all_by_user(user_id).await?;
        if removed > 0 {
            warn!(user_id = %user_id, removed, "Reactions added during user deletion");
        }

        if !self.ctx.user_repo().delete(user_id).await? {
            return Err(ServiceError::not_found("User", user_id));
        }

        info!(user_id = %user_id, reactions_removed = targets.len() as u64 + removed, "User deleted");

        Ok(())
    }
}
