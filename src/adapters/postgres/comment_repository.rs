//! PostgreSQL implementation of CommentRepository.
//!
//! Soft delete flips `is_delete`; rows are never removed here.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::comment::{CommentDetail, RegisterComment, RegisteredComment};
use crate::domain::foundation::{
    CommentId, DeletionStatus, DomainError, ErrorCode, OwnedByUser, ThreadId, UserId,
};
use crate::ports::{CommentRepository, IdGenerator};

use super::forum_rows::{column, timestamp_column, user_column, OwnerRow};

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

fn comment_not_found(id: &CommentId) -> DomainError {
    DomainError::new(ErrorCode::CommentNotFound, "comment not found")
        .with_detail("comment_id", id.as_str())
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add_comment(
        &self,
        comment: &RegisterComment,
    ) -> Result<RegisteredComment, DomainError> {
        let id = CommentId::from_suffix(self.ids.generate());

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, content, thread, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(id.as_str())
        .bind(comment.content())
        .bind(comment.thread().as_str())
        .bind(comment.owner().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert comment", e))?;

        let stored_id: String = column(&row, "id")?;
        let content: String = column(&row, "content")?;

        Ok(RegisteredComment::new(
            stored_id,
            content,
            user_column(&row, "owner")?,
        )?)
    }

    async fn verify_comment_is_exist(&self, id: &CommentId) -> Result<(), DomainError> {
        let found = sqlx::query("SELECT id FROM comments WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check comment existence", e))?;

        found.map(|_| ()).ok_or_else(|| comment_not_found(id))
    }

    async fn verify_comment_owner(&self, id: &CommentId, owner: &UserId) -> Result<(), DomainError> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch comment owner", e))?
            .ok_or_else(|| comment_not_found(id))?;

        OwnerRow(user_column(&row, "owner")?).check_ownership(owner)
    }

    async fn delete_comment_by_id(&self, id: &CommentId) -> Result<(), DomainError> {
        let updated = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1 RETURNING id")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete comment", e))?;

        updated.map(|_| ()).ok_or_else(|| comment_not_found(id))
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentDetail>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.content, c.date, c.is_delete,
                   COALESCE(u.username, c.owner) AS username
            FROM comments c
            LEFT JOIN users u ON u.id = c.owner
            WHERE c.thread = $1
            ORDER BY c.date ASC
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch comments", e))?;

        rows.iter()
            .map(|row| -> Result<CommentDetail, DomainError> {
                let id: String = column(row, "id")?;
                let username: String = column(row, "username")?;
                let content: String = column(row, "content")?;
                let is_delete: bool = column(row, "is_delete")?;

                Ok(CommentDetail::new(
                    CommentId::new(id)?,
                    username,
                    timestamp_column(row, "date")?,
                    content,
                    DeletionStatus::from_flag(is_delete),
                )?)
            })
            .collect()
    }
}
