//! Application handlers.
//!
//! Command and query handlers that orchestrate the forum use cases over the
//! repository ports. Each handler runs its checks strictly in sequence and
//! stops at the first failure.

pub mod comment;
pub mod reply;
pub mod thread;

#[cfg(test)]
pub(crate) mod testing;

pub use comment::{AddCommentCommand, AddCommentHandler, DeleteCommentCommand, DeleteCommentHandler};
pub use reply::{AddReplyCommand, AddReplyHandler, DeleteReplyCommand, DeleteReplyHandler};
pub use thread::{
    AddThreadCommand, AddThreadHandler, CommentView, GetDetailThreadHandler,
    GetDetailThreadQuery, ThreadView,
};
