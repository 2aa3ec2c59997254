//! Service layer errors
//!
//! Services either pass a domain or application error through untouched, or
//! raise one of the few failures that only make sense at this layer.

use blog_common::AppError;
use blog_core::DomainError;
use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    /// Raised by a repository or a domain rule
    Domain(DomainError),

    /// Raised by shared infrastructure (tokens, config)
    App(AppError),

    /// A referenced record does not exist or is soft-deleted
    NotFound { resource: &'static str, id: String },

    Validation(String),

    /// Storage disagreed with what the service just observed
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => e.fmt(f),
            Self::App(e) => e.fmt(f),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::NotFound { .. } | Self::Validation(_) | Self::Internal(_) => None,
        }
    }
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status_code(),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => AppError::NotFound(format!("{resource} {id}")),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::internal(anyhow::anyhow!(msg)),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
