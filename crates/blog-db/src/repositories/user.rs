//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::User;
use blog_core::traits::{RepoResult, UserRepository};
use blog_core::value_objects::Snowflake;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, login, email, created_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        let insert = UserInsert::new(user);

        sqlx::query(
            r"
            INSERT INTO users (id, login, email, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(insert.id)
        .bind(insert.login)
        .bind(insert.email)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
