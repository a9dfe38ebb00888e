//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the forum core and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `ThreadRepository`, `CommentRepository`, `ReplyRepository` - forum storage
//!
//! ## Supporting Ports
//!
//! - `IdGenerator` - unique identifier suffixes
//! - `SessionValidator` - bearer token validation

mod comment_repository;
mod id_generator;
mod reply_repository;
mod session_validator;
mod thread_repository;

pub use comment_repository::CommentRepository;
pub use id_generator::IdGenerator;
pub use reply_repository::ReplyRepository;
pub use session_validator::SessionValidator;
pub use thread_repository::ThreadRepository;
