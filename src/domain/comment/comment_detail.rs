//! CommentDetail - read view of a comment.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{
    ensure_filled, CommentId, DeletionStatus, FieldKind, PayloadReader, Timestamp,
    ValidationError,
};

const ENTITY: &str = "COMMENT_DETAIL";

/// Content shown in place of a deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**comment has been deleted**";

/// Comment as shown to readers.
///
/// The placeholder is applied once, at construction. `content` on a deleted
/// comment is always [`DELETED_COMMENT_CONTENT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    id: CommentId,
    username: String,
    date: Timestamp,
    content: String,
    #[serde(skip)]
    status: DeletionStatus,
}

impl CommentDetail {
    pub fn new(
        id: CommentId,
        username: impl Into<String>,
        date: Timestamp,
        content: impl Into<String>,
        status: DeletionStatus,
    ) -> Result<Self, ValidationError> {
        let (username, content) = (username.into(), content.into());
        ensure_filled(ENTITY, &[("username", &username), ("content", &content)])?;
        let content = status.mask(&content, DELETED_COMMENT_CONTENT).to_string();
        Ok(Self {
            id,
            username,
            date,
            content,
            status,
        })
    }

    /// Creates the view from a JSON payload with `id`, `username`, `date`,
    /// `content` and `is_delete`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("id", FieldKind::Text),
            ("username", FieldKind::Text),
            ("date", FieldKind::Date),
            ("content", FieldKind::Text),
            ("is_delete", FieldKind::Flag),
        ])?;

        let id = CommentId::new(reader.text("id")?)
            .map_err(|_| ValidationError::missing_property(ENTITY, "id"))?;

        Self::new(
            id,
            reader.text("username")?,
            reader.date("date")?,
            reader.text("content")?,
            DeletionStatus::from_flag(reader.flag("is_delete")?),
        )
    }

    pub fn id(&self) -> &CommentId {
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

    pub fn status(&self) -> DeletionStatus {
        self.status
    }

    pub fn is_deleted(&self) -> bool {
        self.status.is_deleted()
    }
}
