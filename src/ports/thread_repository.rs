//! Thread repository port.
//!
//! Every method has a default body that rejects with
//! `THREAD_REPOSITORY.METHOD_NOT_IMPLEMENTED`, so an adapter only overrides
//! the capabilities it actually provides.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ThreadId};
use crate::domain::thread::{RegisterThread, RegisteredThread, ThreadDetail};

const REPOSITORY: &str = "THREAD_REPOSITORY";

/// Repository port for threads.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Stores a new thread and returns its creation view.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_thread(&self, _thread: &RegisterThread) -> Result<RegisteredThread, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "add_thread"))
    }

    /// Succeeds if the thread exists.
    ///
    /// # Errors
    ///
    /// - `ThreadNotFound` if no thread has this id
    async fn verify_thread_is_exist(&self, _id: &ThreadId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "verify_thread_is_exist"))
    }

    /// Loads the read view of a thread with its owner's username.
    ///
    /// # Errors
    ///
    /// - `ThreadNotFound` if no thread has this id
    async fn get_thread_by_id(&self, _id: &ThreadId) -> Result<ThreadDetail, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY, "get_thread_by_id"))
    }
}
