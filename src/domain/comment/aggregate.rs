//! Comment aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CommentId, DeletionStatus, OwnedByUser, ThreadId, Timestamp, UserId, ValidationError,
};

use super::{CommentDetail, RegisterComment, RegisteredComment};

/// Stored comment on a thread.
///
/// # Invariants
///
/// - belongs to exactly one thread
/// - `status` only moves from `Active` to `Deleted`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    thread_id: ThreadId,
    content: String,
    owner: UserId,
    date: Timestamp,
    status: DeletionStatus,
}

impl Comment {
    /// Creates an active comment from a validated registration.
    pub fn create(id: CommentId, registration: &RegisterComment, date: Timestamp) -> Self {
        Self {
            id,
            thread_id: registration.thread().clone(),
            content: registration.content().to_string(),
            owner: registration.owner().clone(),
            date,
            status: DeletionStatus::Active,
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn status(&self) -> DeletionStatus {
        self.status
    }

    /// Soft-deletes the comment. Returns `false` if it was already deleted.
    pub fn delete(&mut self) -> bool {
        if !self.status.can_transition_to(&DeletionStatus::Deleted) {
            return false;
        }
        self.status = DeletionStatus::Deleted;
        true
    }

    pub fn to_registered(&self) -> Result<RegisteredComment, ValidationError> {
        RegisteredComment::new(self.id.as_str(), self.content.clone(), self.owner.clone())
    }

    pub fn to_detail(&self, username: &str) -> Result<CommentDetail, ValidationError> {
        CommentDetail::new(
            self.id.clone(),
            username,
            self.date,
            self.content.clone(),
            self.status,
        )
    }
}

impl OwnedByUser for Comment {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}
