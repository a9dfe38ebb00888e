//! In-memory implementation of ReplyRepository.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comment::RegisteredComment;
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, OwnedByUser, ReplyId, Timestamp, UserId,
};
use crate::domain::reply::{CommentReply, RegisterReply, Reply};
use crate::ports::ReplyRepository;

use super::InMemoryForumStore;

/// Reply storage over the shared in-memory store.
#[derive(Clone)]
pub struct InMemoryReplyRepository {
    store: Arc<InMemoryForumStore>,
}

impl InMemoryReplyRepository {
    pub fn new(store: Arc<InMemoryForumStore>) -> Self {
        Self { store }
    }
}

fn reply_not_found(id: &ReplyId) -> DomainError {
    DomainError::new(ErrorCode::ReplyNotFound, "reply not found").with_detail("reply_id", id.as_str())
}

#[async_trait]
impl ReplyRepository for InMemoryReplyRepository {
    async fn add_reply(&self, reply: &RegisterReply) -> Result<RegisteredComment, DomainError> {
        let id = ReplyId::from_suffix(self.store.next_suffix());
        let stored = Reply::create(id, reply, Timestamp::now());
        let registered = stored.to_registered()?;

        self.store.write()?.replies.push(stored);
        Ok(registered)
    }

    async fn verify_reply_is_exist(&self, id: &ReplyId) -> Result<(), DomainError> {
        if self.store.read()?.replies.iter().any(|r| r.id() == id) {
            Ok(())
        } else {
            Err(reply_not_found(id))
        }
    }

    async fn verify_reply_owner(&self, id: &ReplyId, owner: &UserId) -> Result<(), DomainError> {
        let tables = self.store.read()?;
        let reply = tables
            .replies
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| reply_not_found(id))?;

        reply.check_ownership(owner)
    }

    async fn delete_reply_by_id(&self, id: &ReplyId) -> Result<(), DomainError> {
        let mut tables = self.store.write()?;
        let reply = tables
            .replies
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| reply_not_found(id))?;

        reply.delete();
        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<CommentReply>, DomainError> {
        let wanted: HashSet<&CommentId> = comment_ids.iter().collect();
        let tables = self.store.read()?;
        let mut replies: Vec<&Reply> = tables
            .replies
            .iter()
            .filter(|r| wanted.contains(r.comment_id()))
            .collect();
        replies.sort_by_key(|r| *r.date());

        replies
            .into_iter()
            .map(|r| {
                r.to_comment_reply(&tables.username_of(r.owner_id()))
                    .map_err(DomainError::from)
            })
            .collect()
    }
}
