//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod reaction;
mod user;

pub use comment::CommentModel;
pub use reaction::{ReactionModel, StatusUpdateModel};
pub use user::UserModel;
