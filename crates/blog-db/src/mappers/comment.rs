//! Comment entity <-> model mapper

use blog_core::entities::{Comment, CommentatorInfo};
use blog_core::value_objects::Snowflake;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            content: model.content,
            commentator: CommentatorInfo {
                user_id: Snowflake::new(model.user_id),
                user_login: model.user_login,
            },
            likes_count: model.likes_count,
            dislikes_count: model.dislikes_count,
            created_at: model.created_at,
        }
    }
}

/// Column values for inserting a comment
pub struct CommentInsert<'a> {
    pub id: i64,
    pub post_id: i64,
    pub content: &'a str,
    pub user_id: i64,
    pub user_login: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            post_id: comment.post_id.into_inner(),
            content: &comment.content,
            user_id: comment.commentator.user_id.into_inner(),
            user_login: &comment.commentator.user_login,
        }
    }
}
