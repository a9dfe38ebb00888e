//! Shared in-memory tables backing the in-memory repositories.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::comment::Comment;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::reply::Reply;
use crate::domain::thread::Thread;
use crate::ports::IdGenerator;

/// Rows held by the store. Insertion order is creation order.
#[derive(Debug, Default)]
pub(crate) struct ForumTables {
    pub users: HashMap<UserId, String>,
    pub threads: Vec<Thread>,
    pub comments: Vec<Comment>,
    pub replies: Vec<Reply>,
}

impl ForumTables {
    /// Resolves a username, falling back to the raw user id for unknown users.
    pub fn username_of(&self, user: &UserId) -> String {
        self.users
            .get(user)
            .cloned()
            .unwrap_or_else(|| user.as_str().to_string())
    }
}

/// In-memory forum storage shared by the three in-memory repositories.
///
/// Used by tests and by the binary when `database.url` is `memory://`.
/// Nothing is persisted across restarts.
pub struct InMemoryForumStore {
    tables: RwLock<ForumTables>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryForumStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            tables: RwLock::new(ForumTables::default()),
            ids,
        }
    }

    /// Records the display name for a user id.
    pub fn register_user(
        &self,
        id: UserId,
        username: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.write()?.users.insert(id, username.into());
        Ok(())
    }

    pub(crate) fn next_suffix(&self) -> String {
        self.ids.generate()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, ForumTables>, DomainError> {
        self.tables.read().map_err(|_| poisoned())
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, ForumTables>, DomainError> {
        self.tables.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "in-memory store lock poisoned")
}
