//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the forum domain.

mod auth;
mod deletion_status;
mod errors;
mod ids;
mod ownership;
mod payload;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use deletion_status::DeletionStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CommentId, ReplyId, ThreadId, UserId};
pub use ownership::OwnedByUser;
pub use payload::{ensure_filled, FieldKind, PayloadReader};
pub use timestamp::Timestamp;
