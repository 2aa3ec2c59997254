//! Comment handlers
//!
//! Endpoints for creating, viewing and deleting comments.

use axum::{extract::State, Json};
use blog_service::{CommentService, CommentViewResponse, CreateCommentRequest};

use crate::extractors::{AuthUser, CommentIdPath, OptionalAuthUser, PostIdPath, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a comment on a post
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentViewResponse>>> {
    let post_id = path.post_id()?;

    let service = CommentService::new(state.service_context());
    let comment = service
        .create_comment(post_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(comment)))
}

/// Get a comment, with the caller's like status if authenticated
///
/// GET /comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    SnowflakePath(path): SnowflakePath<CommentIdPath>,
) -> ApiResult<Json<CommentViewResponse>> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let comment = service.get_comment(comment_id, auth.viewer()).await?;
    Ok(Json(comment))
}

/// Delete own comment
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
