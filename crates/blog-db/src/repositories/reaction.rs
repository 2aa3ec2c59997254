//! PostgreSQL implementation of ReactionRepository
//!
//! One row per (user, target) pair. The status column only ever holds
//! `like` or `dislike`; removing a reaction deletes the row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Reaction;
use blog_core::error::DomainError;
use blog_core::traits::{ReactionRepository, RepoResult, StatusUpdate};
use blog_core::value_objects::{ReactionKind, Snowflake};

use crate::mappers::ReactionInsert;
use crate::models::{ReactionModel, StatusUpdateModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT user_id, target_id, status, created_at
            FROM reactions
            WHERE user_id = $1 AND target_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self, reaction), fields(user_id = %reaction.user_id, target_id = %reaction.target_id))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        sqlx::query(
            r"
            INSERT INTO reactions (user_id, target_id, status, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(insert.user_id)
        .bind(insert.target_id)
        .bind(insert.status)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<StatusUpdate> {
        // matched: the row exists; modified: its status actually changed
        let counts = sqlx::query_as::<_, StatusUpdateModel>(
            r"
            WITH existing AS (
                SELECT 1 FROM reactions WHERE user_id = $1 AND target_id = $2
            ),
            updated AS (
                UPDATE reactions SET status = $3
                WHERE user_id = $1 AND target_id = $2 AND status <> $3
                RETURNING 1
            )
            SELECT (SELECT COUNT(*) FROM existing) AS matched,
                   (SELECT COUNT(*) FROM updated) AS modified
            ",
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(kind.as_db_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(StatusUpdate {
            matched: counts.matched > 0,
            modified: counts.modified > 0,
        })
    }

    #[instrument(skip(self))]
    async fn update_timestamp(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE reactions SET created_at = $3
            WHERE user_id = $1 AND target_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM reactions WHERE user_id = $1 AND target_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, target_id: Snowflake, kind: ReactionKind) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM reactions WHERE target_id = $1 AND status = $2
            ",
        )
        .bind(target_id.into_inner())
        .bind(kind.as_db_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_targets_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT target_id FROM reactions WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn delete_all_by_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM reactions WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_all_by_target(&self, target_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM reactions WHERE target_id = $1
            ",
        )
        .bind(target_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
