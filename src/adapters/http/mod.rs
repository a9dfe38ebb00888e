//! HTTP adapter - axum REST surface for the forum.
//!
//! Each resource has its own module with DTOs, handlers and routes;
//! `router` assembles them behind the shared middleware.

pub mod comments;
pub mod middleware;
pub mod payload;
pub mod replies;
pub mod response;
pub mod router;
pub mod threads;

pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use response::{ErrorPolicy, ErrorResponse, SuccessResponse};
pub use router::{forum_router, ForumHandlers, RouterOptions};
