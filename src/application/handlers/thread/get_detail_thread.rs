//! GetDetailThreadHandler - Query handler assembling a thread with its
//! comments and their replies.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::comment::CommentDetail;
use crate::domain::foundation::{CommentId, ThreadId};
use crate::domain::reply::{CommentReply, ReplyDetail};
use crate::domain::thread::ThreadDetail;
use crate::domain::ForumError;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Query to read a thread.
#[derive(Debug, Clone)]
pub struct GetDetailThreadQuery {
    pub thread_id: ThreadId,
}

/// A comment together with its replies, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: CommentDetail,
    pub replies: Vec<ReplyDetail>,
}

/// A thread together with its comments, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadView {
    #[serde(flatten)]
    pub thread: ThreadDetail,
    pub comments: Vec<CommentView>,
}

/// Handler for reading a thread.
pub struct GetDetailThreadHandler {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl GetDetailThreadHandler {
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

    pub async fn handle(&self, query: GetDetailThreadQuery) -> Result<ThreadView, ForumError> {
        let thread = self.threads.get_thread_by_id(&query.thread_id).await?;
        let comments = self
            .comments
            .get_comments_by_thread_id(&query.thread_id)
            .await?;

        let comment_ids: Vec<CommentId> = comments.iter().map(|c| c.id().clone()).collect();
        let rows = self.replies.get_replies_by_comment_ids(&comment_ids).await?;
        let reply_count = rows.len();
        let groups = group_replies(rows);

        let comments = comments
            .into_iter()
            .map(|comment| {
                let replies = groups.get(comment.id()).cloned().unwrap_or_default();
                CommentView { comment, replies }
            })
            .collect::<Vec<_>>();

        debug!(
            thread_id = %query.thread_id,
            comments = comments.len(),
            replies = reply_count,
            "thread detail assembled"
        );

        Ok(ThreadView { thread, comments })
    }
}

/// Buckets replies by the comment they answer, preserving input order.
fn group_replies(rows: Vec<CommentReply>) -> HashMap<CommentId, Vec<ReplyDetail>> {
    let mut groups: HashMap<CommentId, Vec<ReplyDetail>> = HashMap::new();
    for row in rows {
        groups.entry(row.comment_id).or_default().push(row.detail);
    }
    groups
}
