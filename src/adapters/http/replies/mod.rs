//! HTTP adapter for reply endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddedReplyResponse, RepliesPath, ReplyPath};
pub use handlers::ReplyHandlers;
pub use routes::reply_routes;
