//! HTTP error mapping and small response wrappers
//!
//! Every failure leaves the API as `{"error": {"code", "message", "details"?}}`
//! with a status taken from whichever layer raised it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blog_common::AppError;
use blog_core::DomainError;
use blog_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::ValidationErrors;

/// Anything a handler or extractor can reject a request with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid authorization header format")]
    InvalidAuthFormat,
}

/// Lower layers report plain u16 codes
fn http_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => http_status(e.status_code()),
            Self::Service(e) => http_status(e.status_code()),
            Self::Domain(e) => http_status(e.status_code()),
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingAuth | Self::InvalidAuthFormat => StatusCode::UNAUTHORIZED,
        }
    }

    /// Machine-readable code placed in the error body
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingAuth => "MISSING_AUTHORIZATION",
            Self::InvalidAuthFormat => "INVALID_AUTHORIZATION_FORMAT",
        }
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Field-level detail, only for validator failures
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorPayload<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorPayload<'a> {
    code: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        } else {
            debug!(code = self.error_code(), error = %self, "Request rejected");
        }

        let body = ErrorEnvelope {
            error: ErrorPayload {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 201 wrapper
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, self.0).into_response()
    }
}

/// 204 with an empty body
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
