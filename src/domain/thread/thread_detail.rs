//! ThreadDetail - read view of a thread with its author's username.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{
    ensure_filled, FieldKind, PayloadReader, ThreadId, Timestamp, ValidationError,
};

const ENTITY: &str = "THREAD_DETAIL";

/// Thread as shown to readers. The username is resolved from the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    id: ThreadId,
    title: String,
    body: String,
    date: Timestamp,
    username: String,
}

impl ThreadDetail {
    pub fn new(
        id: ThreadId,
        title: impl Into<String>,
        body: impl Into<String>,
        date: Timestamp,
        username: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (title, body, username) = (title.into(), body.into(), username.into());
        ensure_filled(
            ENTITY,
            &[("title", &title), ("body", &body), ("username", &username)],
        )?;
        Ok(Self {
            id,
            title,
            body,
            date,
            username,
        })
    }

    /// Creates the view from a JSON payload with `id`, `title`, `body`, `date` and `username`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("id", FieldKind::Text),
            ("title", FieldKind::Text),
            ("body", FieldKind::Text),
            ("date", FieldKind::Date),
            ("username", FieldKind::Text),
        ])?;

        let id = ThreadId::new(reader.text("id")?)
            .map_err(|_| ValidationError::missing_property(ENTITY, "id"))?;

        Ok(Self {
            id,
            title: reader.text("title")?,
            body: reader.text("body")?,
            date: reader.date("date")?,
            username: reader.text("username")?,
        })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
