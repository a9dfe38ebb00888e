//! Strongly-typed identifier value objects.
//!
//! Forum resources are identified by prefixed strings (`thread-…`,
//! `comment-…`, `reply-…`). The unique suffix comes from an `IdGenerator`;
//! storage adapters join it with the prefix through `from_suffix`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix applied to generated identifiers.
            pub const PREFIX: &'static str = $prefix;

            /// Wraps an existing identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Builds an identifier from a generated suffix.
            pub fn from_suffix(suffix: impl fmt::Display) -> Self {
                Self(format!("{}{}", Self::PREFIX, suffix))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

prefixed_id!(
    /// Unique identifier for a discussion thread.
    ThreadId,
    "thread-",
    "thread_id"
);

prefixed_id!(
    /// Unique identifier for a comment on a thread.
    CommentId,
    "comment-",
    "comment_id"
);

prefixed_id!(
    /// Unique identifier for a reply to a comment.
    ReplyId,
    "reply-",
    "reply_id"
);

/// User identifier issued by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_id_from_suffix_applies_prefix() {
        let id = ThreadId::from_suffix("abc123");
        assert_eq!(id.as_str(), "thread-abc123");
    }

    #[test]
    fn comment_and_reply_ids_use_their_own_prefix() {
        assert_eq!(CommentId::from_suffix(7).as_str(), "comment-7");
        assert_eq!(ReplyId::from_suffix("x").as_str(), "reply-x");
    }

    #[test]
    fn prefixed_id_rejects_empty_string() {
        match CommentId::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "comment_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn prefixed_id_parses_from_str() {
        let id: ReplyId = "reply-123".parse().unwrap();
        assert_eq!(id.to_string(), "reply-123");
    }

    #[test]
    fn prefixed_id_serializes_transparently() {
        let id = ThreadId::new("thread-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"thread-1\"");
    }

    #[test]
    fn user_id_accepts_non_empty_string() {
        let id = UserId::new("user-123").unwrap();
        assert_eq!(id.as_str(), "user-123");
    }

    #[test]
    fn user_id_rejects_empty_string() {
        let result = UserId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn user_id_displays_correctly() {
        let id = UserId::new("user-456").unwrap();
        assert_eq!(format!("{}", id), "user-456");
    }
}
