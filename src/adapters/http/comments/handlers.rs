//! HTTP handlers for comment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::payload::merge_payload;
use crate::adapters::http::response::{ErrorPolicy, SuccessResponse};
use crate::application::{
    AddCommentCommand, AddCommentHandler, DeleteCommentCommand, DeleteCommentHandler,
};
use crate::domain::foundation::{CommentId, ThreadId};
use crate::domain::ForumError;

use super::dto::{AddedCommentResponse, CommentPath};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CommentHandlers {
    add_handler: Arc<AddCommentHandler>,
    delete_handler: Arc<DeleteCommentHandler>,
    errors: ErrorPolicy,
}

impl CommentHandlers {
    pub fn new(
        add_handler: Arc<AddCommentHandler>,
        delete_handler: Arc<DeleteCommentHandler>,
        errors: ErrorPolicy,
    ) -> Self {
        Self {
            add_handler,
            delete_handler,
            errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /threads/:thread_id/comments - Comment on a thread
pub async fn post_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(thread_id): Path<String>,
    body: Option<Json<Value>>,
) -> Response {
    let payload = merge_payload(
        body,
        &[("thread", thread_id.as_str()), ("owner", user.id.as_str())],
    );

    match handlers.add_handler.handle(AddCommentCommand { payload }).await {
        Ok(added_comment) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedCommentResponse { added_comment })),
        )
            .into_response(),
        Err(e) => handlers.errors.respond(e),
    }
}

/// DELETE /threads/:thread_id/comments/:comment_id - Soft-delete own comment
pub async fn delete_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(path): Path<CommentPath>,
) -> Response {
    let cmd = match parse_path(path) {
        Ok((thread_id, comment_id)) => DeleteCommentCommand {
            thread_id,
            comment_id,
            owner: user.id,
        },
        Err(e) => return handlers.errors.respond(e),
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::empty())).into_response(),
        Err(e) => handlers.errors.respond(e),
    }
}

fn parse_path(path: CommentPath) -> Result<(ThreadId, CommentId), ForumError> {
    Ok((ThreadId::new(path.thread_id)?, CommentId::new(path.comment_id)?))
}
