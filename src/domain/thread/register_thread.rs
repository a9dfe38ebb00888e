//! RegisterThread - validated input for creating a thread.

use serde_json::Value;

use crate::domain::foundation::{ensure_filled, FieldKind, PayloadReader, UserId, ValidationError};

const ENTITY: &str = "REGISTER_THREAD";

/// A thread that has passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterThread {
    title: String,
    body: String,
    owner: UserId,
}

impl RegisterThread {
    /// Creates a registration from typed fields.
    ///
    /// # Errors
    ///
    /// - `REGISTER_THREAD.NOT_CONTAIN_NEEDED_PROPERTY` if any field is empty
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (title, body, owner) = (title.into(), body.into(), owner.into());
        ensure_filled(ENTITY, &[("title", &title), ("body", &body), ("owner", &owner)])?;
        Self::assemble(title, body, owner)
    }

    /// Creates a registration from a JSON payload with `title`, `body` and `owner`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let reader = PayloadReader::new(ENTITY, payload);
        reader.ensure_present(&[
            ("title", FieldKind::Text),
            ("body", FieldKind::Text),
            ("owner", FieldKind::Text),
        ])?;

        Self::assemble(reader.text("title")?, reader.text("body")?, reader.text("owner")?)
    }

    fn assemble(title: String, body: String, owner: String) -> Result<Self, ValidationError> {
        let owner =
            UserId::new(owner).map_err(|_| ValidationError::missing_property(ENTITY, "owner"))?;
        Ok(Self { title, body, owner })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
