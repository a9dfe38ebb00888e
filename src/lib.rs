//! Forum API - discussion forum backend.
//!
//! Users start threads, comment on threads and reply to comments. Comments
//! and replies are soft-deleted by their owners and shown with a placeholder
//! afterwards.
//!
//! The crate follows a ports-and-adapters layout: `domain` holds entities and
//! validation, `ports` the repository contracts, `application` the use-case
//! handlers, and `adapters` the storage, auth and HTTP implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
