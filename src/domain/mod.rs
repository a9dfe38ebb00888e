//! Domain layer containing forum entities and business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, payload reading, errors)
//! - `thread` - Top-level discussion posts
//! - `comment` - Comments on threads, soft-deletable
//! - `reply` - Replies to comments, soft-deletable
//! - `errors` - Use-case error type

pub mod comment;
pub mod errors;
pub mod foundation;
pub mod reply;
pub mod thread;

pub use errors::{ForumError, Resource};
