//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid like status: {0}")]
    InvalidLikeStatus(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidLikeStatus(_) => "INVALID_LIKE_STATUS",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::CommentNotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidLikeStatus(_))
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentAuthor)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists)
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
