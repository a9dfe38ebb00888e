//! Comment repository port.
//!
//! Unimplemented methods reject with `COMMENT_REPOSITORY.METHOD_NOT_IMPLEMENTED`.

use async_trait::async_trait;

use crate::domain::comment::{CommentDetail, RegisterComment, RegisteredComment};
use crate::domain::foundation::{CommentId, DomainError, ThreadId, UserId};

const REPOSITORY: &str = "COMMENT_REPOSITORY";

/// Repository port for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment and returns its creation view.
    async fn add_comment(
        &self,
        _comment: &RegisterComment,
    ) -> Result<RegisteredComment, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "add_comment"))
    }

    /// Succeeds if the comment exists, deleted or not.
    ///
    /// The comment's thread is not checked.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if no comment has this id
    async fn verify_comment_is_exist(&self, _id: &CommentId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "verify_comment_is_exist"))
    }

    /// Succeeds if `owner` created the comment.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if no comment has this id
    /// - `Forbidden` if the comment belongs to someone else
    async fn verify_comment_owner(
        &self,
        _id: &CommentId,
        _owner: &UserId,
    ) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "verify_comment_owner"))
    }

    /// Soft-deletes the comment. Deleting an already deleted comment succeeds.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if no comment has this id
    async fn delete_comment_by_id(&self, _id: &CommentId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "delete_comment_by_id"))
    }

    /// Returns the thread's comments, oldest first, with placeholders applied.
    async fn get_comments_by_thread_id(
        &self,
        _thread_id: &ThreadId,
    ) -> Result<Vec<CommentDetail>, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "get_comments_by_thread_id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    struct Unwired;

    impl CommentRepository for Unwired {}

    #[tokio::test]
    async fn unwired_repository_rejects_every_method() {
        let repo = Unwired;
        let registration = RegisterComment::new("hi", "thread-1", "user-1").unwrap();
        let id = CommentId::from_suffix("1");
        let owner = UserId::new("user-1").unwrap();

        let errors = vec![
            repo.add_comment(&registration).await.unwrap_err(),
            repo.verify_comment_is_exist(&id).await.unwrap_err(),
            repo.verify_comment_owner(&id, &owner).await.unwrap_err(),
            repo.delete_comment_by_id(&id).await.unwrap_err(),
            repo.get_comments_by_thread_id(&ThreadId::from_suffix("1"))
                .await
                .unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.code, ErrorCode::MethodNotImplemented);
            assert_eq!(err.message, "COMMENT_REPOSITORY.METHOD_NOT_IMPLEMENTED");
        }
    }
}
