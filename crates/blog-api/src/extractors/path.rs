//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use blog_core::Snowflake;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract path parameters, rejecting with an [`ApiError`]
#[derive(Debug, Clone)]
pub struct SnowflakePath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for SnowflakePath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(SnowflakePath(inner))
    }
}

/// Path parameters with comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id as Snowflake
    pub fn post_id(&self) -> Result<Snowflake, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}
