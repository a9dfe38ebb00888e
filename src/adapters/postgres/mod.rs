//! PostgreSQL adapters - Database implementations for the forum repository ports.
//!
//! - `PostgresThreadRepository`
//! - `PostgresCommentRepository`
//! - `PostgresReplyRepository`
//!
//! Usernames are read from the `users` table owned by the authentication
//! service. The schema lives in `migrations/` and is applied by `run_migrations`.

mod comment_repository;
mod forum_rows;
mod reply_repository;
mod thread_repository;

pub use comment_repository::PostgresCommentRepository;
pub use reply_repository::PostgresReplyRepository;
pub use thread_repository::PostgresThreadRepository;

use sqlx::PgPool;

use crate::domain::foundation::DomainError;

/// Applies the embedded forum schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))
}
