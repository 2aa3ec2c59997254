//! Like status value objects
//!
//! [`LikeStatus`] is what a client asks for and what a viewer sees.
//! [`ReactionKind`] is what actually gets stored: "None" is the absence of a
//! reaction row, never a stored value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Snowflake;
use crate::error::DomainError;

/// Reaction intent / per-viewer status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LikeStatus {
    #[default]
    None,
    Like,
    Dislike,
}

impl LikeStatus {
    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Like => "Like",
            Self::Dislike => "Dislike",
        }
    }

    /// The reaction this status stores, if any
    pub const fn reaction(self) -> Option<ReactionKind> {
        match self {
            Self::None => None,
            Self::Like => Some(ReactionKind::Like),
            Self::Dislike => Some(ReactionKind::Dislike),
        }
    }
}

impl fmt::Display for LikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Like" => Ok(Self::Like),
            "Dislike" => Ok(Self::Dislike),
            other => Err(DomainError::InvalidLikeStatus(other.to_string())),
        }
    }
}

impl From<Option<ReactionKind>> for LikeStatus {
    fn from(kind: Option<ReactionKind>) -> Self {
        match kind {
            None => Self::None,
            Some(ReactionKind::Like) => Self::Like,
            Some(ReactionKind::Dislike) => Self::Dislike,
        }
    }
}

/// A stored reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Database representation
    pub const fn as_db_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// Who is looking at a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    User(Snowflake),
}

impl Viewer {
    pub fn user_id(self) -> Option<Snowflake> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(id),
        }
    }
}

impl From<Option<Snowflake>> for Viewer {
    fn from(user_id: Option<Snowflake>) -> Self {
        user_id.map_or(Self::Anonymous, Self::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("Like".parse::<LikeStatus>().unwrap(), LikeStatus::Like);
        assert_eq!("Dislike".parse::<LikeStatus>().unwrap(), LikeStatus::Dislike);
        assert_eq!("None".parse::<LikeStatus>().unwrap(), LikeStatus::None);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "like".parse::<LikeStatus>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidLikeStatus(ref s) if s == "like"));
        assert!("Love".parse::<LikeStatus>().is_err());
        assert!("".parse::<LikeStatus>().is_err());
    }

    #[test]
    fn test_none_stores_nothing() {
        assert_eq!(LikeStatus::None.reaction(), None);
        assert_eq!(LikeStatus::Like.reaction(), Some(ReactionKind::Like));
        assert_eq!(LikeStatus::from(Some(ReactionKind::Dislike)), LikeStatus::Dislike);
        assert_eq!(LikeStatus::from(None), LikeStatus::None);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&LikeStatus::Dislike).unwrap(), "\"Dislike\"");
        let status: LikeStatus = serde_json::from_str("\"None\"").unwrap();
        assert_eq!(status, LikeStatus::None);
    }

    #[test]
    fn test_reaction_kind_db_roundtrip() {
        for kind in [ReactionKind::Like, ReactionKind::Dislike] {
            assert_eq!(ReactionKind::from_db_str(kind.as_db_str()), Some(kind));
        }
        assert_eq!(ReactionKind::from_db_str("none"), None);
    }

    #[test]
    fn test_viewer() {
        assert_eq!(Viewer::from(None), Viewer::Anonymous);
        assert_eq!(Viewer::User(Snowflake::new(7)).user_id(), Some(Snowflake::new(7)));
        assert_eq!(Viewer::Anonymous.user_id(), None);
    }
}
