//! RegisterComment - validated input for commenting on a thread.

use serde_json::Value;

use crate::domain::foundation::{
    ensure_filled, FieldKind, PayloadReader, ThreadId, UserId, ValidationError,
};

const ENTITY: &str = "REGISTER_COMMENT";

/// A comment that has passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterComment {
    content: String,
    thread: ThreadId,
    owner: UserId,
}

impl RegisterComment {
    pub fn new(
        content: impl Into<String>,
        thread: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (content, thread, owner) = (content.into(), thread.into(), owner.into());
        ensure_filled(
            ENTITY,
            &[("content", &content), ("thread", &thread), ("owner", &owner)],
        )?;
        Self::assemble(content, thread, owner)
    }

    /// Creates a registration from a JSON payload with `content`, `thread` and `owner`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("content", FieldKind::Text),
            ("thread", FieldKind::Text),
            ("owner", FieldKind::Text),
        ])?;

        Self::assemble(
            reader.text("content")?,
            reader.text("thread")?,
            reader.text("owner")?,
        )
    }

    fn assemble(content: String, thread: String, owner: String) -> Result<Self, ValidationError> {
        let thread = ThreadId::new(thread)
            .map_err(|_| ValidationError::missing_property(ENTITY, "thread"))?;
        let owner =
            UserId::new(owner).map_err(|_| ValidationError::missing_property(ENTITY, "owner"))?;
        Ok(Self {
            content,
            thread,
            owner,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thread(&self) -> &ThreadId {
        &self.thread
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_payload_without_content() {
        let payload = json!({ "thread": "thread-123", "owner": "user-123" });

        let err = RegisterComment::from_payload(&payload).unwrap_err();

        assert_eq!(err.to_string(), "REGISTER_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
        assert_eq!(err.field(), "content");
    }

    #[test]
    fn rejects_payload_with_wrong_types() {
        let payload = json!({ "content": ["text"], "thread": 1, "owner": {} });

        let err = RegisterComment::from_payload(&payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "REGISTER_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn missing_property_wins_over_wrong_type() {
        let payload = json!({ "content": 42, "owner": "user-123" });

        let err = RegisterComment::from_payload(&payload).unwrap_err();

        assert!(matches!(err, ValidationError::MissingProperty { .. }));
    }

    #[test]
    fn creates_from_valid_payload() {
        let payload = json!({
            "content": "Nice thread",
            "thread": "thread-123",
            "owner": "user-123",
        });

        let comment = RegisterComment::from_payload(&payload).unwrap();

        assert_eq!(comment.content(), "Nice thread");
        assert_eq!(comment.thread().as_str(), "thread-123");
        assert_eq!(comment.owner().as_str(), "user-123");
    }
}
