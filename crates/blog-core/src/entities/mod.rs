//! Domain entities - core business objects

mod comment;
mod reaction;
mod user;

pub use comment::{Comment, CommentatorInfo, LikesInfo};
pub use reaction::Reaction;
pub use user::User;
