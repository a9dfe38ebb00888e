//! HTTP routes for reply endpoints.

use axum::{
    routing::{delete, post},
    Router,
};

use super::handlers::{delete_reply, post_reply, ReplyHandlers};

/// Creates the reply router.
pub fn reply_routes(handlers: ReplyHandlers) -> Router {
    Router::new()
        .route(
            "/threads/:thread_id/comments/:comment_id/replies",
            post(post_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id",
            delete(delete_reply),
        )
        .with_state(handlers)
}
