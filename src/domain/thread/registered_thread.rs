//! RegisteredThread - the view returned after a thread is stored.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{
    ensure_filled, FieldKind, PayloadReader, ThreadId, UserId, ValidationError,
};

const ENTITY: &str = "REGISTERED_THREAD";

/// A newly stored thread. The body is deliberately not echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredThread {
    id: ThreadId,
    title: String,
    owner: UserId,
}

impl RegisteredThread {
    pub fn new(id: ThreadId, title: impl Into<String>, owner: UserId) -> Result<Self, ValidationError> {
        let title = title.into();
        ensure_filled(ENTITY, &[("title", &title)])?;
        Ok(Self { id, title, owner })
    }

    /// Creates the view from a JSON payload with `id`, `title` and `owner`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("id", FieldKind::Text),
            ("title", FieldKind::Text),
            ("owner", FieldKind::Text),
        ])?;

        let id = ThreadId::new(reader.text("id")?)
            .map_err(|_| ValidationError::missing_property(ENTITY, "id"))?;
        let title = reader.text("title")?;
        let owner = UserId::new(reader.text("owner")?)
            .map_err(|_| ValidationError::missing_property(ENTITY, "owner"))?;

        Ok(Self { id, title, owner })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
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
        let payload = json!({ "id": "thread-123", "title": "A thread" });

        let err = RegisteredThread::from_payload(&payload).unwrap_err();

        assert_eq!(err.to_string(), "REGISTERED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn rejects_payload_with_wrong_types() {
        let payload = json!({ "id": 123, "title": {}, "owner": true });

        let err = RegisteredThread::from_payload(&payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "REGISTERED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn serializes_without_body() {
        let thread = RegisteredThread::new(
            ThreadId::new("thread-123").unwrap(),
            "A thread",
            UserId::new("user-123").unwrap(),
        )
        .unwrap();

        let json = serde_json::to_value(&thread).unwrap();

        assert_eq!(
            json,
            json!({ "id": "thread-123", "title": "A thread", "owner": "user-123" })
        );
    }
}
