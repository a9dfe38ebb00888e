//! RegisterReply - validated input for replying to a comment.

use serde_json::Value;

use crate::domain::foundation::{
    ensure_filled, CommentId, FieldKind, PayloadReader, ThreadId, UserId, ValidationError,
};

const ENTITY: &str = "REGISTER_REPLY";

/// A reply that has passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterReply {
    content: String,
    thread: ThreadId,
    comment: CommentId,
    owner: UserId,
}

impl RegisterReply {
    pub fn new(
        content: impl Into<String>,
        thread: impl Into<String>,
        comment: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (content, thread, comment, owner) =
            (content.into(), thread.into(), comment.into(), owner.into());
        ensure_filled(
            ENTITY,
            &[
                ("content", &content),
                ("thread", &thread),
                ("comment", &comment),
                ("owner", &owner),
            ],
        )?;
        Self::assemble(content, thread, comment, owner)
    }

    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("content", FieldKind::Text),
            ("thread", FieldKind::Text),
            ("comment", FieldKind::Text),
            ("owner", FieldKind::Text),
        ])?;

        Self::assemble(
            reader.text("content")?,
            reader.text("thread")?,
            reader.text("comment")?,
            reader.text("owner")?,
        )
    }

    fn assemble(
        content: String,
        thread: String,
        comment: String,
        owner: String,
    ) -> Result<Self, ValidationError> {
        let missing = |field: &str| ValidationError::missing_property(ENTITY, field);
        Ok(Self {
            content,
            thread: ThreadId::new(thread).map_err(|_| missing("thread"))?,
            comment: CommentId::new(comment).map_err(|_| missing("comment"))?,
            owner: UserId::new(owner).map_err(|_| missing("owner"))?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thread(&self) -> &ThreadId {
        &self.thread
    }

    pub fn comment(&self) -> &CommentId {
        &self.comment
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
    fn rejects_payload_without_comment() {
        let payload = json!({ "content": "hi", "thread": "thread-1", "owner": "user-1" });

        let err = RegisterReply::from_payload(&payload).unwrap_err();

        assert_eq!(err.to_string(), "REGISTER_REPLY.NOT_CONTAIN_NEEDED_PROPERTY");
        assert_eq!(err.field(), "comment");
    }

    #[test]
    fn rejects_empty_content() {
        let payload = json!({
            "content": "",
            "thread": "thread-1",
            "comment": "comment-1",
            "owner": "user-1",
        });

        let err = RegisterReply::from_payload(&payload).unwrap_err();

        assert_eq!(err.field(), "content");
    }

    #[test]
    fn rejects_payload_with_wrong_types() {
        let payload = json!({
            "content": 123,
            "thread": "thread-1",
            "comment": "comment-1",
            "owner": "user-1",
        });

        let err = RegisterReply::from_payload(&payload).unwrap_err();

        assert_eq!(err.to_string(), "REGISTER_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn typed_constructor_matches_payload_path() {
        let from_new = RegisterReply::new("hi", "thread-1", "comment-1", "user-1").unwrap();
        let from_payload = RegisterReply::from_payload(&json!({
            "content": "hi",
            "thread": "thread-1",
            "comment": "comment-1",
            "owner": "user-1",
        }))
        .unwrap();

        assert_eq!(from_new, from_payload);
        assert_eq!(from_new.comment().as_str(), "comment-1");
    }
}
