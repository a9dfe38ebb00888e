//! Authentication middleware and extractor for axum.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The middleware never rejects. Public routes (reading a thread) ignore the
//! header entirely; routes that write use `RequireAuth`, which rejects with
//! 401 (or 503) when no user was injected, reporting the token failure the
//! middleware recorded, if any.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::response::fail_response;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Validates `Authorization: Bearer <token>` and injects the user.
///
/// On a failed validation the `AuthError` is stored in the request
/// extensions instead of a user.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            match &e {
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Auth service unavailable: {}", msg)
                }
                _ => tracing::warn!("bearer token rejected: {}", e),
            }
            request.extensions_mut().insert(e);
            next.run(request).await
        }
    }
}

/// Extractor that requires authentication.
///
/// # Example
///
/// ```ignore
/// async fn post_thread(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.username_or_id())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
                return Ok(RequireAuth(user.clone()));
            }
            match parts.extensions.get::<AuthError>() {
                Some(error) => Err(AuthRejection::Rejected(error.clone())),
                None => Err(AuthRejection::Unauthenticated),
            }
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No bearer token was provided.
    Unauthenticated,
    /// A bearer token was provided but did not validate.
    Rejected(AuthError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => {
                fail_response(StatusCode::UNAUTHORIZED, "Missing authentication")
            }
            AuthRejection::Rejected(AuthError::TokenExpired) => {
                fail_response(StatusCode::UNAUTHORIZED, "Token expired")
            }
            AuthRejection::Rejected(AuthError::InvalidToken) => {
                fail_response(StatusCode::UNAUTHORIZED, "Invalid token")
            }
            AuthRejection::Rejected(AuthError::ServiceUnavailable(_)) => fail_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            ),
        }
    }
}
