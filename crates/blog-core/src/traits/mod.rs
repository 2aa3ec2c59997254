//! Ports implemented by the infrastructure layer

mod repositories;
mod target;

pub use repositories::{
    CommentRepository, ReactionRepository, RepoResult, StatusUpdate, UserRepository,
};
pub use target::ReactionTarget;
