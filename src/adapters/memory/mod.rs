//! In-memory adapters for the forum repository ports.
//!
//! All three repositories share one `InMemoryForumStore`, so a comment added
//! through one is visible to the others.

mod comment_repository;
mod reply_repository;
mod store;
mod thread_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use reply_repository::InMemoryReplyRepository;
pub use store::InMemoryForumStore;
pub use thread_repository::InMemoryThreadRepository;
