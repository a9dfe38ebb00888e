//! ReplyDetail - read view of a reply.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{
    ensure_filled, CommentId, DeletionStatus, FieldKind, PayloadReader, ReplyId, Timestamp,
    ValidationError,
};

const ENTITY: &str = "REPLY_DETAIL";

/// Content shown in place of a deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**reply has been deleted**";

/// Reply as shown to readers, with the deletion placeholder already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDetail {
    id: ReplyId,
    username: String,
    date: Timestamp,
    content: String,
    #[serde(skip)]
    status: DeletionStatus,
}

impl ReplyDetail {
    pub fn new(
        id: ReplyId,
        username: impl Into<String>,
        date: Timestamp,
        content: impl Into<String>,
        status: DeletionStatus,
    ) -> Result<Self, ValidationError> {
        let (username, content) = (username.into(), content.into());
        ensure_filled(ENTITY, &[("username", &username), ("content", &content)])?;
        let content = status.mask(&content, DELETED_REPLY_CONTENT).to_string();
        Ok(Self {
            id,
            username,
            date,
            content,
            status,
        })
    }

    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("id", FieldKind::Text),
            ("username", FieldKind::Text),
            ("date", FieldKind::Date),
            ("content", FieldKind::Text),
            ("is_delete", FieldKind::Flag),
        ])?;

        let id = ReplyId::new(reader.text("id")?)
            .map_err(|_| ValidationError::missing_property(ENTITY, "id"))?;

        Self::new(
            id,
            reader.text("username")?,
            reader.date("date")?,
            reader.text("content")?,
            DeletionStatus::from_flag(reader.flag("is_delete")?),
        )
    }

    pub fn id(&self) -> &ReplyId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.status.is_deleted()
    }
}

/// A reply detail tagged with the comment it answers.
///
/// Returned by the batched reply lookup so callers can group replies by comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReply {
    pub comment_id: CommentId,
    pub detail: ReplyDetail,
}
