//! Forum router assembly.
//!
//! Wires the use-case handlers over a set of repositories and wraps the
//! merged routes with auth, timeout, CORS and request tracing layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware::from_fn_with_state, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::{
    AddCommentHandler, AddReplyHandler, AddThreadHandler, DeleteCommentHandler,
    DeleteReplyHandler, GetDetailThreadHandler,
};
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

use super::comments::{comment_routes, CommentHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::replies::{reply_routes, ReplyHandlers};
use super::response::ErrorPolicy;
use super::threads::{thread_routes, ThreadHandlers};

/// Handler state for every forum endpoint.
#[derive(Clone)]
pub struct ForumHandlers {
    pub threads: ThreadHandlers,
    pub comments: CommentHandlers,
    pub replies: ReplyHandlers,
}

impl ForumHandlers {
    pub fn from_repositories(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
        errors: ErrorPolicy,
    ) -> Self {
        Self {
            threads: ThreadHandlers::new(
                Arc::new(AddThreadHandler::new(threads.clone())),
                Arc::new(GetDetailThreadHandler::new(
                    threads.clone(),
                    comments.clone(),
                    replies.clone(),
                )),
                errors,
            ),
            comments: CommentHandlers::new(
                Arc::new(AddCommentHandler::new(threads.clone(), comments.clone())),
                Arc::new(DeleteCommentHandler::new(threads.clone(), comments.clone())),
                errors,
            ),
            replies: ReplyHandlers::new(
                Arc::new(AddReplyHandler::new(
                    threads.clone(),
                    comments.clone(),
                    replies.clone(),
                )),
                Arc::new(DeleteReplyHandler::new(threads, comments, replies)),
                errors,
            ),
        }
    }
}

/// Cross-cutting router settings.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub request_timeout: Duration,
    /// Allowed origins; `*` allows any.
    pub cors_origins: Vec<String>,
    pub enable_tracing: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: vec!["*".to_string()],
            enable_tracing: false,
        }
    }
}

/// Builds the complete forum API router.
pub fn forum_router(handlers: ForumHandlers, auth: AuthState, options: RouterOptions) -> Router {
    let router = Router::new()
        .merge(thread_routes(handlers.threads))
        .merge(comment_routes(handlers.comments))
        .merge(reply_routes(handlers.replies))
        .layer(from_fn_with_state(auth, auth_middleware))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins));

    if options.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
