//! Id generation port.
//!
//! Storage adapters ask for a unique suffix and join it with the resource
//! prefix (`thread-`, `comment-`, `reply-`).

/// Produces unique identifier suffixes.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
