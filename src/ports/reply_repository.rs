//! Reply repository port.

use async_trait::async_trait;

use crate::domain::comment::RegisteredComment;
use crate::domain::foundation::{CommentId, DomainError, ReplyId, UserId};
use crate::domain::reply::{CommentReply, RegisterReply};

const REPOSITORY: &str = "REPLY_REPOSITORY";

/// Repository port for replies.
///
/// Unimplemented methods reject with `REPLY_REPOSITORY.METHOD_NOT_IMPLEMENTED`.
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, _reply: &RegisterReply) -> Result<RegisteredComment, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "add_reply"))
    }

    /// # Errors
    ///
    /// - `ReplyNotFound` if no reply has this id
    async fn verify_reply_is_exist(&self, _id: &ReplyId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "verify_reply_is_exist"))
    }

    /// # Errors
    ///
    /// - `ReplyNotFound` if no reply has this id
    /// - `Forbidden` if the reply belongs to someone else
    async fn verify_reply_owner(&self, _id: &ReplyId, _owner: &UserId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "verify_reply_owner"))
    }

    /// Soft-deletes the reply. Deleting an already deleted reply succeeds.
    async fn delete_reply_by_id(&self, _id: &ReplyId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "delete_reply_by_id"))
    }

    /// Returns the replies of all given comments in one flat list, oldest first.
    async fn get_replies_by_comment_ids(
        &self,
        _comment_ids: &[CommentId],
    ) -> Result<Vec<CommentReply>, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "get_replies_by_comment_ids"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    struct Unwired;

    impl ReplyRepository for Unwired {}

    #[tokio::test]
    async fn unwired_repository_rejects_every_method() {
        let repo = Unwired;
        let registration = RegisterReply::new("hi", "thread-1", "comment-1", "user-1").unwrap();
        let id = ReplyId::from_suffix("1");
        let owner = UserId::new("user-1").unwrap();

        let errors = vec![
            repo.add_reply(&registration).await.unwrap_err(),
            repo.verify_reply_is_exist(&id).await.unwrap_err(),
            repo.verify_reply_owner(&id, &owner).await.unwrap_err(),
            repo.delete_reply_by_id(&id).await.unwrap_err(),
            repo.get_replies_by_comment_ids(&[CommentId::from_suffix("1")])
                .await
                .unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.code, ErrorCode::MethodNotImplemented);
            assert_eq!(err.message, "REPLY_REPOSITORY.METHOD_NOT_IMPLEMENTED");
        }
    }
}
