//! Reply aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::comment::RegisteredComment;
use crate::domain::foundation::{
    CommentId, DeletionStatus, OwnedByUser, ReplyId, ThreadId, Timestamp, UserId,
    ValidationError,
};

use super::{CommentReply, RegisterReply, ReplyDetail};

/// Stored reply to a comment.
///
/// Replies nest only one level deep: a reply answers a comment, never
/// another reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    id: ReplyId,
    thread_id: ThreadId,
    comment_id: CommentId,
    content: String,
    owner: UserId,
    date: Timestamp,
    status: DeletionStatus,
}

impl Reply {
    pub fn create(id: ReplyId, registration: &RegisterReply, date: Timestamp) -> Self {
        Self {
            id,
            thread_id: registration.thread().clone(),
            comment_id: registration.comment().clone(),
            content: registration.content().to_string(),
            owner: registration.owner().clone(),
            date,
            status: DeletionStatus::Active,
        }
    }

    pub fn id(&self) -> &ReplyId {
        &self.id
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &CommentId {
        &self.comment_id
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

    /// Soft-deletes the reply. Returns `false` if it was already deleted.
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

    pub fn to_comment_reply(&self, username: &str) -> Result<CommentReply, ValidationError> {
        let detail = ReplyDetail::new(
            self.id.clone(),
            username,
            self.date,
            self.content.clone(),
            self.status,
        )?;
        Ok(CommentReply {
            comment_id: self.comment_id.clone(),
            detail,
        })
    }
}

impl OwnedByUser for Reply {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}
