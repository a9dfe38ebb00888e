//! DeleteCommentHandler - Command handler for soft-deleting a comment.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{CommentId, ThreadId, UserId};
use crate::domain::ForumError;
use crate::ports::{CommentRepository, ThreadRepository};

/// Command to delete a comment.
#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub owner: UserId,
}

/// Handler for deleting comments.
///
/// Existence is checked before ownership, so a missing thread or comment
/// reports not found rather than forbidden.
pub struct DeleteCommentHandler {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl DeleteCommentHandler {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { threads, comments }
    }

    pub async fn handle(&self, cmd: DeleteCommentCommand) -> Result<(), ForumError> {
        self.threads.verify_thread_is_exist(&cmd.thread_id).await?;
        self.comments.verify_comment_is_exist(&cmd.comment_id).await?;

        if let Err(err) = self
            .comments
            .verify_comment_owner(&cmd.comment_id, &cmd.owner)
            .await
        {
            warn!(comment_id = %cmd.comment_id, user_id = %cmd.owner, "comment delete refused");
            return Err(err.into());
        }

        self.comments.delete_comment_by_id(&cmd.comment_id).await?;

        debug!(comment_id = %cmd.comment_id, "comment deleted");
        Ok(())
    }
}
