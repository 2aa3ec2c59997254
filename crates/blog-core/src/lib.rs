//! # blog-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, CommentatorInfo, LikesInfo, Reaction, User};
pub use error::DomainError;
pub use traits::{
    CommentRepository, ReactionRepository, ReactionTarget, RepoResult, StatusUpdate,
    UserRepository,
};
pub use value_objects::{
    LikeStatus, ReactionKind, Snowflake, SnowflakeGenerator, SnowflakeParseError, Viewer,
};
