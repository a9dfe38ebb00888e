//! End-to-end forum scenarios over the in-memory adapters.
//!
//! These tests drive the use-case handlers exactly as the HTTP layer does,
//! with every repository backed by one shared store.

use serde_json::json;
use std::sync::Arc;

use forum_api::adapters::id::SequentialIdGenerator;
use forum_api::adapters::memory::{
    InMemoryCommentRepository, InMemoryForumStore, InMemoryReplyRepository,
    InMemoryThreadRepository,
};
use forum_api::application::{
    AddCommentCommand, AddCommentHandler, AddReplyCommand, AddReplyHandler, AddThreadCommand,
    AddThreadHandler, DeleteCommentCommand, DeleteCommentHandler, DeleteReplyCommand,
    DeleteReplyHandler, GetDetailThreadHandler, GetDetailThreadQuery,
};
use forum_api::domain::comment::DELETED_COMMENT_CONTENT;
use forum_api::domain::foundation::{CommentId, ReplyId, ThreadId, UserId};
use forum_api::domain::reply::DELETED_REPLY_CONTENT;
use forum_api::domain::{ForumError, Resource};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Forum {
    add_thread: AddThreadHandler,
    get_thread: GetDetailThreadHandler,
    add_comment: AddCommentHandler,
    delete_comment: DeleteCommentHandler,
    add_reply: AddReplyHandler,
    delete_reply: DeleteReplyHandler,
}

impl Forum {
    fn new() -> Self {
        let store = Arc::new(InMemoryForumStore::new(Arc::new(SequentialIdGenerator::new())));
        store.register_user(user("user-a"), "alice").unwrap();
        store.register_user(user("user-b"), "bob").unwrap();

        let threads = Arc::new(InMemoryThreadRepository::new(store.clone()));
        let comments = Arc::new(InMemoryCommentRepository::new(store.clone()));
        let replies = Arc::new(InMemoryReplyRepository::new(store));

        Self {
            add_thread: AddThreadHandler::new(threads.clone()),
            get_thread: GetDetailThreadHandler::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
            ),
            add_comment: AddCommentHandler::new(threads.clone(), comments.clone()),
            delete_comment: DeleteCommentHandler::new(threads.clone(), comments.clone()),
            add_reply: AddReplyHandler::new(threads.clone(), comments.clone(), replies.clone()),
            delete_reply: DeleteReplyHandler::new(threads, comments, replies),
        }
    }

    async fn thread(&self, owner: &str) -> ThreadId {
        self.add_thread
            .handle(AddThreadCommand {
                payload: json!({ "title": "Rust forums", "body": "Say hi", "owner": owner }),
            })
            .await
            .unwrap()
            .id()
            .clone()
    }

    async fn comment(&self, thread: &ThreadId, owner: &str, content: &str) -> CommentId {
        let added = self
            .add_comment
            .handle(AddCommentCommand {
                payload: json!({ "content": content, "thread": thread.as_str(), "owner": owner }),
            })
            .await
            .unwrap();
        CommentId::new(added.id()).unwrap()
    }

    async fn reply(&self, thread: &ThreadId, comment: &CommentId, owner: &str) -> ReplyId {
        let added = self
            .add_reply
            .handle(AddReplyCommand {
                payload: json!({
                    "content": "a reply",
                    "thread": thread.as_str(),
                    "comment": comment.as_str(),
                    "owner": owner,
                }),
            })
            .await
            .unwrap();
        ReplyId::new(added.id()).unwrap()
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn thread_detail_shows_deleted_comment_and_nested_reply() {
    let forum = Forum::new();

    let t1 = forum.thread("user-a").await;
    let c1 = forum.comment(&t1, "user-b", "first!").await;
    forum
        .delete_comment
        .handle(DeleteCommentCommand {
            thread_id: t1.clone(),
            comment_id: c1.clone(),
            owner: user("user-b"),
        })
        .await
        .unwrap();
    let c2 = forum.comment(&t1, "user-b", "second").await;
    let r1 = forum.reply(&t1, &c2, "user-a").await;

    let view = forum
        .get_thread
        .handle(GetDetailThreadQuery { thread_id: t1.clone() })
        .await
        .unwrap();

    assert_eq!(view.thread.id(), &t1);
    assert_eq!(view.thread.username(), "alice");
    assert_eq!(view.comments.len(), 2);

    assert_eq!(view.comments[0].comment.id(), &c1);
    assert_eq!(view.comments[0].comment.content(), DELETED_COMMENT_CONTENT);
    assert!(view.comments[0].replies.is_empty());

    assert_eq!(view.comments[1].comment.id(), &c2);
    assert_eq!(view.comments[1].comment.content(), "second");
    assert_eq!(view.comments[1].comment.username(), "bob");
    let replies: Vec<_> = view.comments[1].replies.iter().map(|r| r.id().clone()).collect();
    assert_eq!(replies, vec![r1]);
}

#[tokio::test]
async fn thread_owner_cannot_delete_someone_elses_comment() {
    let forum = Forum::new();
    let t1 = forum.thread("user-a").await;
    let c1 = forum.comment(&t1, "user-b", "mine").await;

    let err = forum
        .delete_comment
        .handle(DeleteCommentCommand {
            thread_id: t1.clone(),
            comment_id: c1,
            owner: user("user-a"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ForumError::Forbidden(_)));

    let view = forum
        .get_thread
        .handle(GetDetailThreadQuery { thread_id: t1 })
        .await
        .unwrap();
    assert_eq!(view.comments[0].comment.content(), "mine");
}

#[tokio::test]
async fn deleted_reply_is_masked_and_repeat_delete_succeeds() {
    let forum = Forum::new();
    let t1 = forum.thread("user-a").await;
    let c1 = forum.comment(&t1, "user-a", "question").await;
    let r1 = forum.reply(&t1, &c1, "user-b").await;

    let delete = || DeleteReplyCommand {
        thread_id: t1.clone(),
        comment_id: c1.clone(),
        reply_id: r1.clone(),
        owner: user("user-b"),
    };
    forum.delete_reply.handle(delete()).await.unwrap();
    forum.delete_reply.handle(delete()).await.unwrap();

    let view = forum
        .get_thread
        .handle(GetDetailThreadQuery { thread_id: t1.clone() })
        .await
        .unwrap();
    assert_eq!(view.comments[0].replies[0].content(), DELETED_REPLY_CONTENT);
}

#[tokio::test]
async fn commenting_on_missing_thread_is_not_found() {
    let forum = Forum::new();

    let err = forum
        .add_comment
        .handle(AddCommentCommand {
            payload: json!({ "content": "hello", "thread": "thread-nope", "owner": "user-a" }),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForumError::NotFound { resource: Resource::Thread, .. }
    ));
}

#[tokio::test]
async fn replying_to_missing_comment_is_not_found() {
    let forum = Forum::new();
    let t1 = forum.thread("user-a").await;

    let err = forum
        .add_reply
        .handle(AddReplyCommand {
            payload: json!({
                "content": "hello",
                "thread": t1.as_str(),
                "comment": "comment-nope",
                "owner": "user-a",
            }),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForumError::NotFound { resource: Resource::Comment, .. }
    ));
}

#[tokio::test]
async fn invalid_thread_payload_is_rejected_before_storage() {
    let forum = Forum::new();

    let err = forum
        .add_thread
        .handle(AddThreadCommand {
            payload: json!({ "title": 42, "body": "b", "owner": "user-a" }),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "REGISTER_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION");
}
