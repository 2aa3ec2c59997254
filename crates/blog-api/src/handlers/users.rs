//! User handlers
//!
//! Endpoints for the current user's profile.

use axum::{extract::State, Json};
use blog_service::{UserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get_current_user(auth.user_id).await?;
    Ok(Json(user))
}

/// Delete current user, along with their reactions
///
/// DELETE /users/@me
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_user(auth.user_id).await?;
    Ok(NoContent)
}
