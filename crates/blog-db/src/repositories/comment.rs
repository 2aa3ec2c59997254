//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Comment;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::mappers::CommentInsert;
use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, content, user_id, user_login, likes_count, dislikes_count,
                   created_at, deleted_at
            FROM comments
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let insert = CommentInsert::new(comment);

        sqlx::query(
            r"
            INSERT INTO comments (id, post_id, content, user_id, user_login,
                                  likes_count, dislikes_count, created_at)
            VALUES ($1, $2, $3, $4, $5, 0, 0, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.post_id)
        .bind(insert.content)
        .bind(insert.user_id)
        .bind(insert.user_login)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE comments SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_likes_counts(
        &self,
        id: Snowflake,
        likes_count: i64,
        dislikes_count: i64,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET likes_count = $2, dislikes_count = $3
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(likes_count)
        .bind(dislikes_count)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
