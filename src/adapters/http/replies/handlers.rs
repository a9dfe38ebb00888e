//! HTTP handlers for reply endpoints.

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
use crate::application::{AddReplyCommand, AddReplyHandler, DeleteReplyCommand, DeleteReplyHandler};
use crate::domain::foundation::{CommentId, ReplyId, ThreadId};
use crate::domain::ForumError;

use super::dto::{AddedReplyResponse, RepliesPath, ReplyPath};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReplyHandlers {
    add_handler: Arc<AddReplyHandler>,
    delete_handler: Arc<DeleteReplyHandler>,
    errors: ErrorPolicy,
}

impl ReplyHandlers {
    pub fn new(
        add_handler: Arc<AddReplyHandler>,
        delete_handler: Arc<DeleteReplyHandler>,
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

/// POST /threads/:thread_id/comments/:comment_id/replies - Reply to a comment
pub async fn post_reply(
    State(handlers): State<ReplyHandlers>,
    RequireAuth(user): RequireAuth,
    Path(path): Path<RepliesPath>,
    body: Option<Json<Value>>,
) -> Response {
    let payload = merge_payload(
        body,
        &[
            ("thread", path.thread_id.as_str()),
            ("comment", path.comment_id.as_str()),
            ("owner", user.id.as_str()),
        ],
    );

    match handlers.add_handler.handle(AddReplyCommand { payload }).await {
        Ok(added_reply) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedReplyResponse { added_reply })),
        )
            .into_response(),
        Err(e) => handlers.errors.respond(e),
    }
}

/// DELETE /threads/:thread_id/comments/:comment_id/replies/:reply_id - Soft-delete own reply
pub async fn delete_reply(
    State(handlers): State<ReplyHandlers>,
    RequireAuth(user): RequireAuth,
    Path(path): Path<ReplyPath>,
) -> Response {
    let cmd = match parse_path(path) {
        Ok((thread_id, comment_id, reply_id)) => DeleteReplyCommand {
            thread_id,
            comment_id,
            reply_id,
            owner: user.id,
        },
        Err(e) => return handlers.errors.respond(e),
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::empty())).into_response(),
        Err(e) => handlers.errors.respond(e),
    }
}

fn parse_path(path: ReplyPath) -> Result<(ThreadId, CommentId, ReplyId), ForumError> {
    Ok((
        ThreadId::new(path.thread_id)?,
        CommentId::new(path.comment_id)?,
        ReplyId::new(path.reply_id)?,
    ))
}
