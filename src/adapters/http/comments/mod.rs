//! HTTP adapter for comment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddedCommentResponse, CommentPath};
pub use handlers::CommentHandlers;
pub use routes::comment_routes;
