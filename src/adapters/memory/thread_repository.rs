//! In-memory implementation of ThreadRepository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ThreadId, Timestamp};
use crate::domain::thread::{RegisterThread, RegisteredThread, Thread, ThreadDetail};
use crate::ports::ThreadRepository;

use super::InMemoryForumStore;

/// Thread storage over the shared in-memory store.
#[derive(Clone)]
pub struct InMemoryThreadRepository {
    store: Arc<InMemoryForumStore>,
}

impl InMemoryThreadRepository {
    pub fn new(store: Arc<InMemoryForumStore>) -> Self {
        Self { store }
    }
}

fn thread_not_found(id: &ThreadId) -> DomainError {
    DomainError::new(ErrorCode::ThreadNotFound, "thread not found").with_detail("thread_id", id.as_str())
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn add_thread(&self, thread: &RegisterThread) -> Result<RegisteredThread, DomainError> {
        let id = ThreadId::from_suffix(self.store.next_suffix());
        let stored = Thread::create(id, thread, Timestamp::now());
        let registered = stored.to_registered()?;

        self.store.write()?.threads.push(stored);
        Ok(registered)
    }

    async fn verify_thread_is_exist(&self, id: &ThreadId) -> Result<(), DomainError> {
        if self.store.read()?.threads.iter().any(|t| t.id() == id) {
            Ok(())
        } else {
            Err(thread_not_found(id))
        }
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadDetail, DomainError> {
        let tables = self.store.read()?;
        let thread = tables
            .threads
            .iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| thread_not_found(id))?;

        Ok(thread.to_detail(&tables.username_of(thread.owner()))?)
    }
}
