//! Recording repository double shared by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::comment::{CommentDetail, RegisterComment, RegisteredComment};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, ReplyId, ThreadId, UserId,
};
use crate::domain::reply::{CommentReply, RegisterReply};
use crate::domain::thread::{RegisterThread, RegisteredThread, ThreadDetail};
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Implements all three repositories, logging each call in order.
///
/// A single method can be primed to fail; every other call succeeds.
pub(crate) struct RecordingForum {
    calls: Mutex<Vec<&'static str>>,
    failure: Option<(&'static str, DomainError)>,
    thread: Option<ThreadDetail>,
    comments: Vec<CommentDetail>,
    replies: Vec<CommentReply>,
    requested_comment_ids: Mutex<Vec<CommentId>>,
}

impl RecordingForum {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
            thread: None,
            comments: Vec::new(),
            replies: Vec::new(),
            requested_comment_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, method: &'static str, code: ErrorCode) -> Self {
        self.failure = Some((method, DomainError::new(code, format!("{} failed", method))));
        self
    }

    pub fn with_thread(mut self, thread: ThreadDetail) -> Self {
        self.thread = Some(thread);
        self
    }

    pub fn with_comments(mut self, comments: Vec<CommentDetail>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_replies(mut self, replies: Vec<CommentReply>) -> Self {
        self.replies = replies;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn requested_comment_ids(&self) -> Vec<CommentId> {
        self.requested_comment_ids.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(method);
        match &self.failure {
            Some((failing, err)) if *failing == method => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ThreadRepository for RecordingForum {
    async fn add_thread(&self, thread: &RegisterThread) -> Result<RegisteredThread, DomainError> {
        self.record("add_thread")?;
        Ok(RegisteredThread::new(
            ThreadId::from_suffix("123"),
            thread.title(),
            thread.owner().clone(),
        )?)
    }

    async fn verify_thread_is_exist(&self, _id: &ThreadId) -> Result<(), DomainError> {
        self.record("verify_thread_is_exist")
    }

    async fn get_thread_by_id(&self, _id: &ThreadId) -> Result<ThreadDetail, DomainError> {
        self.record("get_thread_by_id")?;
        self.thread
            .clone()
            .ok_or_else(|| DomainError::new(ErrorCode::ThreadNotFound, "thread not found"))
    }
}

#[async_trait]
impl CommentRepository for RecordingForum {
    async fn add_comment(
        &self,
        comment: &RegisterComment,
    ) -> Result<RegisteredComment, DomainError> {
        self.record("add_comment")?;
        Ok(RegisteredComment::new(
            "comment-123",
            comment.content(),
            comment.owner().clone(),
        )?)
    }

    async fn verify_comment_is_exist(&self, _id: &CommentId) -> Result<(), DomainError> {
        self.record("verify_comment_is_exist")
    }

    async fn verify_comment_owner(
        &self,
        _id: &CommentId,
        _owner: &UserId,
    ) -> Result<(), DomainError> {
        self.record("verify_comment_owner")
    }

    async fn delete_comment_by_id(&self, _id: &CommentId) -> Result<(), DomainError> {
        self.record("delete_comment_by_id")
    }

    async fn get_comments_by_thread_id(
        &self,
        _thread_id: &ThreadId,
    ) -> Result<Vec<CommentDetail>, DomainError> {
        self.record("get_comments_by_thread_id")?;
        Ok(self.comments.clone())
    }
}

#[async_trait]
impl ReplyRepository for RecordingForum {
    async fn add_reply(&self, reply: &RegisterReply) -> Result<RegisteredComment, DomainError> {
        self.record("add_reply")?;
        Ok(RegisteredComment::new(
            "reply-123",
            reply.content(),
            reply.owner().clone(),
        )?)
    }

    async fn verify_reply_is_exist(&self, _id: &ReplyId) -> Result<(), DomainError> {
        self.record("verify_reply_is_exist")
    }

    async fn verify_reply_owner(&self, _id: &ReplyId, _owner: &UserId) -> Result<(), DomainError> {
        self.record("verify_reply_owner")
    }

    async fn delete_reply_by_id(&self, _id: &ReplyId) -> Result<(), DomainError> {
        self.record("delete_reply_by_id")
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<CommentReply>, DomainError> {
        self.record("get_replies_by_comment_ids")?;
        self.requested_comment_ids
            .lock()
            .unwrap()
            .extend_from_slice(comment_ids);
        Ok(self.replies.clone())
    }
}
