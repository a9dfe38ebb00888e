//! PostgreSQL implementation of ReplyRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::comment::RegisteredComment;
use crate::domain::foundation::{
    CommentId, DeletionStatus, DomainError, ErrorCode, OwnedByUser, ReplyId, UserId,
};
use crate::domain::reply::{CommentReply, RegisterReply, ReplyDetail};
use crate::ports::{IdGenerator, ReplyRepository};

use super::forum_rows::{column, timestamp_column, user_column, OwnerRow};

/// PostgreSQL implementation of ReplyRepository.
#[derive(Clone)]
pub struct PostgresReplyRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PostgresReplyRepository {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

fn reply_not_found(id: &ReplyId) -> DomainError {
    DomainError::new(ErrorCode::ReplyNotFound, "reply not found").with_detail("reply_id", id.as_str())
}

#[async_trait]
impl ReplyRepository for PostgresReplyRepository {
    async fn add_reply(&self, reply: &RegisterReply) -> Result<RegisteredComment, DomainError> {
        let id = ReplyId::from_suffix(self.ids.generate());

        let row = sqlx::query(
            r#"
            INSERT INTO replies (id, content, comment, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(id.as_str())
        .bind(reply.content())
        .bind(reply.comment().as_str())
        .bind(reply.owner().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert reply", e))?;

        let stored_id: String = column(&row, "id")?;
        let content: String = column(&row, "content")?;

        Ok(RegisteredComment::new(
            stored_id,
            content,
            user_column(&row, "owner")?,
        )?)
    }

    async fn verify_reply_is_exist(&self, id: &ReplyId) -> Result<(), DomainError> {
        let found = sqlx::query("SELECT id FROM replies WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check reply existence", e))?;

        found.map(|_| ()).ok_or_else(|| reply_not_found(id))
    }

    async fn verify_reply_owner(&self, id: &ReplyId, owner: &UserId) -> Result<(), DomainError> {
        let row = sqlx::query("SELECT owner FROM replies WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch reply owner", e))?
            .ok_or_else(|| reply_not_found(id))?;

        OwnerRow(user_column(&row, "owner")?).check_ownership(owner)
    }

    async fn delete_reply_by_id(&self, id: &ReplyId) -> Result<(), DomainError> {
        let updated = sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = $1 RETURNING id")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete reply", e))?;

        updated.map(|_| ()).ok_or_else(|| reply_not_found(id))
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<CommentReply>, DomainError> {
        let ids: Vec<String> = comment_ids.iter().map(|id| id.as_str().to_string()).collect();

        let rows = sqlx::query(
            r#"
            SELECT r.id, r.comment, r.content, r.date, r.is_delete,
                   COALESCE(u.username, r.owner) AS username
            FROM replies r
            LEFT JOIN users u ON u.id = r.owner
            WHERE r.comment = ANY($1)
            ORDER BY r.date ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch replies", e))?;

        rows.iter()
            .map(|row| -> Result<CommentReply, DomainError> {
                let id: String = column(row, "id")?;
                let comment: String = column(row, "comment")?;
                let username: String = column(row, "username")?;
                let content: String = column(row, "content")?;
                let is_delete: bool = column(row, "is_delete")?;

                let detail = ReplyDetail::new(
                    ReplyId::new(id)?,
                    username,
                    timestamp_column(row, "date")?,
                    content,
                    DeletionStatus::from_flag(is_delete),
                )?;

                Ok(CommentReply {
                    comment_id: CommentId::new(comment)?,
                    detail,
                })
            })
            .collect()
    }
}
