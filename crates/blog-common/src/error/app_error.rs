//! Application error types
//!
//! Unified error handling for the entire application.

use blog_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authentication")]
    MissingAuth,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status and machine-readable code
    fn classify(&self) -> (u16, &'static str) {
        match self {
            Self::InvalidToken => (401, "INVALID_TOKEN"),
            Self::TokenExpired => (401, "TOKEN_EXPIRED"),
            Self::MissingAuth => (401, "MISSING_AUTH"),
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
            Self::NotFound(_) => (404, "NOT_FOUND"),
            Self::Database(_) => (500, "DATABASE_ERROR"),
            Self::Internal(_) => (500, "INTERNAL_ERROR"),
            Self::Config(_) => (500, "CONFIG_ERROR"),
            Self::Domain(e) => (e.status_code(), e.code()),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.classify().0
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.classify().1
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::Snowflake;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::NotFound("comment".to_string()).status_code(), 404);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_errors_keep_their_mapping() {
        let err = AppError::from(DomainError::CommentNotFound(Snowflake::new(9)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_COMMENT");
        assert_eq!(err.to_string(), "Comment not found: 9");
    }

    #[test]
    fn test_internal_hides_its_source() {
        let err = AppError::internal(anyhow::anyhow!("connection reset"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
