//! RegisteredComment - the view returned after a comment or reply is stored.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{ensure_filled, FieldKind, PayloadReader, UserId, ValidationError};

const ENTITY: &str = "REGISTERED_COMMENT";

/// A newly stored comment or reply.
///
/// Replies share this shape, so the id is kept as a plain string rather
/// than a `CommentId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredComment {
    id: String,
    content: String,
    owner: UserId,
}

impl RegisteredComment {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: UserId,
    ) -> Result<Self, ValidationError> {
        let (id, content) = (id.into(), content.into());
        ensure_filled(ENTITY, &[("id", &id), ("content", &content)])?;
        Ok(Self { id, content, owner })
    }

    /// Creates the view from a JSON payload with `id`, `content` and `owner`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("id", FieldKind::Text),
            ("content", FieldKind::Text),
            ("owner", FieldKind::Text),
        ])?;

        let owner = UserId::new(reader.text("owner")?)
            .map_err(|_| ValidationError::missing_property(ENTITY, "owner"))?;

        Ok(Self {
            id: reader.text("id")?,
            content: reader.text("content")?,
            owner,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
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
    fn rejects_payload_without_needed_property() {
        let payload = json!({ "id": "comment-123", "owner": "user-123" });

        let err = RegisteredComment::from_payload(&payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "REGISTERED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY"
        );
    }

    #[test]
    fn rejects_payload_with_wrong_types() {
        let payload = json!({ "id": 1, "content": true, "owner": [] });

        let err = RegisteredComment::from_payload(&payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "REGISTERED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn creates_from_valid_payload() {
        let payload = json!({ "id": "reply-123", "content": "Agreed", "owner": "user-123" });

        let registered = RegisteredComment::from_payload(&payload).unwrap();

        assert_eq!(registered.id(), "reply-123");
        assert_eq!(registered.content(), "Agreed");
        assert_eq!(registered.owner().as_str(), "user-123");
    }
}
