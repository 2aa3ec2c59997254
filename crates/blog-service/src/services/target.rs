//! Reaction targets
//!
//! Adapters that let the ledger and recount work against a concrete entity.

use std::sync::Arc;

use async_trait::async_trait;
use blog_core::traits::{CommentRepository, ReactionTarget, RepoResult};
use blog_core::Snowflake;

/// Comments as a reaction target
#[derive(Clone)]
pub struct CommentTarget {
    comments: Arc<dyn CommentRepository>,
}

impl CommentTarget {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl ReactionTarget for CommentTarget {
    fn kind(&self) -> &'static str {
        "Comment"
    }

    async fn exists(&self, target_id: Snowflake) -> RepoResult<bool> {
        Ok(self.comments.find_by_id(target_id).await?.is_some())
    }

    async fn set_aggregate_counts(
        &self,
        target_id: Snowflake,
        likes_count: i64,
        dislikes_count: i64,
    ) -> RepoResult<bool> {
        self.comments
            .set_likes_counts(target_id, likes_count, dislikes_count)
            .await
    }
}
