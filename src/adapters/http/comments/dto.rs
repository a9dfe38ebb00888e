//! Request and response bodies for comment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::comment::RegisteredComment;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentResponse {
    pub added_comment: RegisteredComment,
}

/// Path of a single comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPath {
    pub thread_id: String,
    pub comment_id: String,
}
