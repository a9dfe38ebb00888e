//! Comment domain module.

mod aggregate;
mod comment_detail;
mod register_comment;
mod registered_comment;

pub use aggregate::Comment;
pub use comment_detail::{CommentDetail, DELETED_COMMENT_CONTENT};
pub use register_comment::RegisterComment;
pub use registered_comment::RegisteredComment;
