//! HTTP routes for thread endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_thread, post_thread, ThreadHandlers};

/// Creates the thread router.
pub fn thread_routes(handlers: ThreadHandlers) -> Router {
    Router::new()
        .route("/threads", post(post_thread))
        .route("/threads/:thread_id", get(get_thread))
        .with_state(handlers)
}
