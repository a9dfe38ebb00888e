//! HTTP handlers for thread endpoints.

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
    AddThreadCommand, AddThreadHandler, GetDetailThreadHandler, GetDetailThreadQuery,
};
use crate::domain::foundation::ThreadId;
use crate::domain::ForumError;

use super::dto::{AddedThreadResponse, ThreadDetailResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ThreadHandlers {
    add_handler: Arc<AddThreadHandler>,
    detail_handler: Arc<GetDetailThreadHandler>,
    errors: ErrorPolicy,
}

impl ThreadHandlers {
    pub fn new(
        add_handler: Arc<AddThreadHandler>,
        detail_handler: Arc<GetDetailThreadHandler>,
        errors: ErrorPolicy,
    ) -> Self {
        Self {
            add_handler,
            detail_handler,
            errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /threads - Start a thread
pub async fn post_thread(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<Value>>,
) -> Response {
    let payload = merge_payload(body, &[("owner", user.id.as_str())]);

    match handlers.add_handler.handle(AddThreadCommand { payload }).await {
        Ok(added_thread) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedThreadResponse { added_thread })),
        )
            .into_response(),
        Err(e) => handlers.errors.respond(e),
    }
}

/// GET /threads/:thread_id - Thread with its comments and replies
pub async fn get_thread(
    State(handlers): State<ThreadHandlers>,
    Path(thread_id): Path<String>,
) -> Response {
    let thread_id = match ThreadId::new(thread_id) {
        Ok(id) => id,
        Err(e) => return handlers.errors.respond(ForumError::from(e)),
    };

    match handlers
        .detail_handler
        .handle(GetDetailThreadQuery { thread_id })
        .await
    {
        Ok(thread) => (
            StatusCode::OK,
            Json(SuccessResponse::with_data(ThreadDetailResponse { thread })),
        )
            .into_response(),
        Err(e) => handlers.errors.respond(e),
    }
}
