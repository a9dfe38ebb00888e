//! Reply command handlers.

mod add_reply;
mod delete_reply;

pub use add_reply::{AddReplyCommand, AddReplyHandler};
pub use delete_reply::{DeleteReplyCommand, DeleteReplyHandler};
