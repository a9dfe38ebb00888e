//! In-memory implementation of CommentRepository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comment::{Comment, CommentDetail, RegisterComment, RegisteredComment};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, OwnedByUser, ThreadId, Timestamp, UserId,
};
use crate::ports::CommentRepository;

use super::InMemoryForumStore;

/// Comment storage over the shared in-memory store.
#[derive(Clone)]
pub struct InMemoryCommentRepository {
    store: Arc<InMemoryForumStore>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<InMemoryForumStore>) -> Self {
        Self { store }
    }
}

fn comment_not_found(id: &CommentId) -> DomainError {
    DomainError::new(ErrorCode::CommentNotFound, "comment not found")
        .with_detail("comment_id", id.as_str())
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn add_comment(
        &self,
        comment: &RegisterComment,
    ) -> Result<RegisteredComment, DomainError> {
        let id = CommentId::from_suffix(self.store.next_suffix());
        let stored = Comment::create(id, comment, Timestamp::now());
        let registered = stored.to_registered()?;

        self.store.write()?.comments.push(stored);
        Ok(registered)
    }

    async fn verify_comment_is_exist(&self, id: &CommentId) -> Result<(), DomainError> {
        if self.store.read()?.comments.iter().any(|c| c.id() == id) {
            Ok(())
        } else {
            Err(comment_not_found(id))
        }
    }

    async fn verify_comment_owner(&self, id: &CommentId, owner: &UserId) -> Result<(), DomainError> {
        let tables = self.store.read()?;
        let comment = tables
            .comments
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| comment_not_found(id))?;

        comment.check_ownership(owner)
    }

    async fn delete_comment_by_id(&self, id: &CommentId) -> Result<(), DomainError> {
        let mut tables = self.store.write()?;
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| comment_not_found(id))?;

        comment.delete();
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentDetail>, DomainError> {
        let tables = self.store.read()?;
        let mut comments: Vec<&Comment> = tables
            .comments
            .iter()
            .filter(|c| c.thread_id() == thread_id)
            .collect();
        comments.sort_by_key(|c| *c.date());

        comments
            .into_iter()
            .map(|c| {
                c.to_detail(&tables.username_of(c.owner_id()))
                    .map_err(DomainError::from)
            })
            .collect()
    }
}
