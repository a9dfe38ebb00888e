//! AddCommentHandler - Command handler for commenting on a thread.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::comment::{RegisterComment, RegisteredComment};
use crate::domain::ForumError;
use crate::ports::{CommentRepository, ThreadRepository};

/// Command to add a comment.
///
/// The payload carries `content`, `thread` and `owner`.
#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub payload: Value,
}

/// Handler for adding comments.
pub struct AddCommentHandler {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddCommentHandler {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { threads, comments }
    }

    pub async fn handle(&self, cmd: AddCommentCommand) -> Result<RegisteredComment, ForumError> {
        // 1. Validate
        let registration = RegisterComment::from_payload(&cmd.payload)?;

        // 2. Thread must exist
        self.threads
            .verify_thread_is_exist(registration.thread())
            .await?;

        // 3. Persist
        let added = self.comments.add_comment(&registration).await?;

        debug!(
            comment_id = added.id(),
            thread_id = %registration.thread(),
            "comment added"
        );
        Ok(added)
    }
}
