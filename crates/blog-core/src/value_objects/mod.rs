//! Value objects - immutable types that represent domain concepts

mod like_status;
mod snowflake;

pub use like_status::{LikeStatus, ReactionKind, Viewer};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
