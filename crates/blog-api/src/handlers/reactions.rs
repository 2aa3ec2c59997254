//! Reaction handlers
//!
//! Endpoint for setting the caller's like status on a comment.

use axum::extract::State;
use blog_service::{ReactionLedger, UpdateLikeStatusRequest};

use crate::extractors::{AuthUser, CommentIdPath, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Set like status
///
/// PUT /comments/{comment_id}/like-status
///
/// Re-sending the current status, or "None" without a reaction, is still a 204.
pub async fn update_like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateLikeStatusRequest>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;
    let status = request.status()?;

    ReactionLedger::new(state.service_context())
        .set_reaction(auth.user_id, comment_id, status)
        .await?;
    Ok(NoContent)
}
