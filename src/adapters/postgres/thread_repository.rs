//! PostgreSQL implementation of ThreadRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, ThreadId};
use crate::domain::thread::{RegisterThread, RegisteredThread, ThreadDetail};
use crate::ports::{IdGenerator, ThreadRepository};

use super::forum_rows::{column, timestamp_column, user_column};

/// PostgreSQL implementation of ThreadRepository.
#[derive(Clone)]
pub struct PostgresThreadRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

fn thread_not_found(id: &ThreadId) -> DomainError {
    DomainError::new(ErrorCode::ThreadNotFound, "thread not found").with_detail("thread_id", id.as_str())
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn add_thread(&self, thread: &RegisterThread) -> Result<RegisteredThread, DomainError> {
        let id = ThreadId::from_suffix(self.ids.generate());

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            "#,
        )
        .bind(id.as_str())
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert thread", e))?;

        let stored_id: String = column(&row, "id")?;
        let title: String = column(&row, "title")?;
        let owner = user_column(&row, "owner")?;

        Ok(RegisteredThread::new(ThreadId::new(stored_id)?, title, owner)?)
    }

    async fn verify_thread_is_exist(&self, id: &ThreadId) -> Result<(), DomainError> {
        let found = sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check thread existence", e))?;

        match found {
            Some(_) => Ok(()),
            None => Err(thread_not_found(id)),
        }
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadDetail, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.title, t.body, t.date,
                   COALESCE(u.username, t.owner) AS username
            FROM threads t
            LEFT JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch thread", e))?
        .ok_or_else(|| thread_not_found(id))?;

        let title: String = column(&row, "title")?;
        let body: String = column(&row, "body")?;
        let username: String = column(&row, "username")?;

        Ok(ThreadDetail::new(
            id.clone(),
            title,
            body,
            timestamp_column(&row, "date")?,
            username,
        )?)
    }
}
