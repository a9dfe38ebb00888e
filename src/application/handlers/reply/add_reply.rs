//! AddReplyHandler - Command handler for replying to a comment.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::comment::RegisteredComment;
use crate::domain::reply::RegisterReply;
use crate::domain::ForumError;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Command to add a reply.
///
/// The payload carries `content`, `thread`, `comment` and `owner`.
#[derive(Debug, Clone)]
pub struct AddReplyCommand {
    pub payload: Value,
}

/// Handler for adding replies.
pub struct AddReplyHandler {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl AddReplyHandler {
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

    pub async fn handle(&self, cmd: AddReplyCommand) -> Result<RegisteredComment, ForumError> {
        let registration = RegisterReply::from_payload(&cmd.payload)?;

        self.threads
            .verify_thread_is_exist(registration.thread())
            .await?;
        self.comments
            .verify_comment_is_exist(registration.comment())
            .await?;

        let added = self.replies.add_reply(&registration).await?;

        debug!(
            reply_id = added.id(),
            comment_id = %registration.comment(),
            "reply added"
        );
        Ok(added)
    }
}
