//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Comment, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::{ReactionKind, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user that has not been deleted
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user. Returns false if no live user matched.
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment that has not been soft-deleted
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Soft delete a comment. Returns false if no live comment matched.
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Overwrite both cached counters in one statement.
    /// Returns false if no live comment matched.
    async fn set_likes_counts(
        &self,
        id: Snowflake,
        likes_count: i64,
        dislikes_count: i64,
    ) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Outcome of a status update on a reaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusUpdate {
    /// A row existed for the (user, target) pair
    pub matched: bool,
    /// The stored status actually changed
    pub modified: bool,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction to a target
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Insert a reaction. Fails with `ReactionAlreadyExists` if the pair already has one.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    async fn update_status(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<StatusUpdate>;

    /// Returns false if no row matched
    async fn update_timestamp(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Remove a reaction; removing a missing one is not an error
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<()>;

    async fn count_by_status(&self, target_id: Snowflake, kind: ReactionKind) -> RepoResult<i64>;

    /// Targets the user currently has a reaction on
    async fn find_targets_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Remove every reaction made by a user, returning how many were removed
    async fn delete_all_by_user(&self, user_id: Snowflake) -> RepoResult<u64>;

    /// Remove every reaction on a target, returning how many were removed
    async fn delete_all_by_target(&self, target_id: Snowflake) -> RepoResult<u64>;
}
