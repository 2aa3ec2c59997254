//! Authentication extractors
//!
//! Extracts and validates JWT bearer tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_core::{Snowflake, Viewer};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

/// Validate a bearer token against the app's JWT service
fn authenticate(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().validate_access_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Invalid access token");
        ApiError::from(e)
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        ApiError::from(e)
    })?;

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    if parts.headers.contains_key(header::AUTHORIZATION) {
                        ApiError::InvalidAuthFormat
                    } else {
                        ApiError::MissingAuth
                    }
                })?;

        authenticate(&AppState::from_ref(state), bearer.token())
    }
}

/// Optional authenticated user
///
/// `None` if no authorization header is present; a present but invalid
/// token is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The caller as a comment viewer
    pub fn viewer(&self) -> Viewer {
        Viewer::from(self.0.as_ref().map(|auth| auth.user_id))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let auth = authenticate(&AppState::from_ref(state), bearer.token())?;
                Ok(OptionalAuthUser(Some(auth)))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
