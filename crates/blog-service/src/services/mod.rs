//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod reaction;
pub mod recount;
pub mod target;
pub mod user;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::{ReactionChange, ReactionLedger};
pub use recount::RecountService;
pub use target::CommentTarget;
pub use user::UserService;
