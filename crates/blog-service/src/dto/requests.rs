//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use blog_core::LikeStatus;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 20, max = 300, message = "Content must be 20-300 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Set like status request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLikeStatusRequest {
    /// "Like", "Dislike" or "None"
    #[validate(custom(function = "validate_like_status"))]
    pub like_status: String,
}

impl UpdateLikeStatusRequest {
    /// The requested status
    pub fn status(&self) -> ServiceResult<LikeStatus> {
        self.like_status.parse().map_err(ServiceError::from)
    }
}

fn validate_like_status(value: &str) -> Result<(), ValidationError> {
    value.parse::<LikeStatus>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("like_status");
        err.message = Some("likeStatus must be one of Like, Dislike, None".into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn like_status(raw: &str) -> UpdateLikeStatusRequest {
        serde_json::from_value(serde_json::json!({ "likeStatus": raw })).unwrap()
    }

    #[test]
    fn test_like_status_accepts_known_values() {
        for (raw, expected) in [
            ("Like", LikeStatus::Like),
            ("Dislike", LikeStatus::Dislike),
            ("None", LikeStatus::None),
        ] {
            let request = like_status(raw);
            assert!(request.validate().is_ok());
            assert_eq!(request.status().unwrap(), expected);
        }
    }

    #[test]
    fn test_like_status_rejects_unknown_values() {
        for raw in ["like", "Love", ""] {
            let request = like_status(raw);
            assert!(request.validate().is_err(), "{raw:?} should be rejected");
            assert_eq!(request.status().unwrap_err().status_code(), 400);
        }
    }

    #[test]
    fn test_like_status_field_name() {
        let result =
            serde_json::from_value::<UpdateLikeStatusRequest>(serde_json::json!({ "like_status": "Like" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_comment_content_length() {
        let short = CreateCommentRequest {
            content: "too short".to_string(),
        };
        assert!(short.validate().is_err());

        let ok = CreateCommentRequest {
            content: "x".repeat(20),
        };
        assert!(ok.validate().is_ok());

        let long = CreateCommentRequest {
            content: "x".repeat(301),
        };
        assert!(long.validate().is_err());
    }
}
