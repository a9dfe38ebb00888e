//! Thread aggregate entity.
//!
//! Threads are the top-level discussion posts. They are created once and
//! never modified; comments reference a thread by ID.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OwnedByUser, ThreadId, Timestamp, UserId, ValidationError};

use super::{RegisterThread, RegisteredThread, ThreadDetail};

/// Stored thread.
///
/// # Invariants
///
/// - `id` is assigned by the repository and carries the `thread-` prefix
/// - `title`, `body` are non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    id: ThreadId,
    title: String,
    body: String,
    owner: UserId,
    date: Timestamp,
}

impl Thread {
    /// Creates a thread from a validated registration.
    pub fn create(id: ThreadId, registration: &RegisterThread, date: Timestamp) -> Self {
        Self {
            id,
            title: registration.title().to_string(),
            body: registration.body().to_string(),
            owner: registration.owner().clone(),
            date,
        }
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

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    /// Returns the creation view (no body).
    pub fn to_registered(&self) -> Result<RegisteredThread, ValidationError> {
        RegisteredThread::new(self.id.clone(), self.title.clone(), self.owner.clone())
    }

    /// Returns the read view with the owner's resolved username.
    pub fn to_detail(&self, username: &str) -> Result<ThreadDetail, ValidationError> {
        ThreadDetail::new(
            self.id.clone(),
            self.title.clone(),
            self.body.clone(),
            self.date,
            username,
        )
    }
}

impl OwnedByUser for Thread {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}
