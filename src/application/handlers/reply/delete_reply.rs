//! DeleteReplyHandler - Command handler for soft-deleting a reply.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{CommentId, ReplyId, ThreadId, UserId};
use crate::domain::ForumError;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Command to delete a reply.
#[derive(Debug, Clone)]
pub struct DeleteReplyCommand {
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub reply_id: ReplyId,
    pub owner: UserId,
}

/// Handler for deleting replies.
pub struct DeleteReplyHandler {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl DeleteReplyHandler {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
        }
    }

    pub async fn handle(&self, cmd: DeleteReplyCommand) -> Result<(), ForumError> {
        // 1. Existence, outermost first
        self.threads.verify_thread_is_exist(&cmd.thread_id).await?;
        self.comments.verify_comment_is_exist(&cmd.comment_id).await?;
        self.replies.verify_reply_is_exist(&cmd.reply_id).await?;

        // 2. Ownership
        if let Err(err) = self
            .replies
            .verify_reply_owner(&cmd.reply_id, &cmd.owner)
            .await
        {
            warn!(reply_id = %cmd.reply_id, user_id = %cmd.owner, "reply delete refused");
            return Err(err.into());
        }

        // 3. Soft delete
        self.replies.delete_reply_by_id(&cmd.reply_id).await?;

        debug!(reply_id = %cmd.reply_id, "reply deleted");
        Ok(())
    }
}
