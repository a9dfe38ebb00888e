//! Reply domain module.
//!
//! Replies answer comments. Creation returns the same `RegisteredComment`
//! view that comments use.

mod aggregate;
mod register_reply;
mod reply_detail;

pub use aggregate::Reply;
pub use register_reply::RegisterReply;
pub use reply_detail::{CommentReply, ReplyDetail, DELETED_REPLY_CONTENT};
