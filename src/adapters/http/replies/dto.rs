//! Request and response bodies for reply endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::comment::RegisteredComment;

/// A new reply is reported in the same shape as a new comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyResponse {
    pub added_reply: RegisteredComment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepliesPath {
    pub thread_id: String,
    pub comment_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyPath {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
}
