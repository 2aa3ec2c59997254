//! Comment service
//!
//! Creating, viewing and deleting comments. Viewing renders the caller's
//! own like status alongside the cached counters.

use blog_core::entities::{Comment, CommentatorInfo};
use blog_core::{DomainError, Snowflake, Viewer};
use tracing::{info, instrument};

use crate::dto::{CommentViewResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reaction::ReactionLedger;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentViewResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", author_id))?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            post_id,
            request.content,
            CommentatorInfo {
                user_id: author.id,
                user_login: author.login,
            },
        );

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        // A fresh comment has no reactions, the author's included
        Ok(CommentViewResponse::new(&comment, comment.likes_info(Default::default())))
    }

    /// Get a comment as seen by `viewer`
    #[instrument(skip(self))]
    pub async fn get_comment(
        &self,
        comment_id: Snowflake,
        viewer: Viewer,
    ) -> ServiceResult<CommentViewResponse> {
        let comment = self.get_comment_entity(comment_id).await?;

        let my_status = ReactionLedger::new(self.ctx)
            .viewer_status(viewer, comment_id)
            .await?;

        Ok(CommentViewResponse::new(&comment, comment.likes_info(my_status)))
    }

    /// Get comment entity by ID
    #[instrument(skip(self))]
    pub async fn get_comment_entity(&self, comment_id: Snowflake) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id))
    }

    /// Soft delete a comment and drop its reactions. Only the author may do this.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let comment = self.get_comment_entity(comment_id).await?;

        if !comment.is_author(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        if !self.ctx.comment_repo().delete(comment_id).await? {
            return Err(ServiceError::not_found("Comment", comment_id));
        }

        let removed = self
            .ctx
            .reaction_repo()
            .delete_all_by_target(comment_id)
            .await?;

        info!(comment_id = %comment_id, reactions_removed = removed, "Comment deleted");

        Ok(())
    }
}
