//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Access token validation (JWT, mock)
//! - `http` - axum REST surface
//! - `id` - Id suffix generators
//! - `memory` - In-memory repositories for tests and local runs
//! - `postgres` - sqlx-backed repositories

pub mod auth;
pub mod http;
pub mod id;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use http::{forum_router, ForumHandlers, RouterOptions};
pub use id::{SequentialIdGenerator, UuidIdGenerator};
pub use memory::{
    InMemoryCommentRepository, InMemoryForumStore, InMemoryReplyRepository,
    InMemoryThreadRepository,
};
pub use postgres::{
    run_migrations, PostgresCommentRepository, PostgresReplyRepository, PostgresThreadRepository,
};
