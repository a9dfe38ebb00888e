//! AddThreadHandler - Command handler for starting a discussion thread.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::thread::{RegisterThread, RegisteredThread};
use crate::domain::ForumError;
use crate::ports::ThreadRepository;

/// Command to add a thread.
///
/// The payload carries `title`, `body` and `owner`; the HTTP layer sets
/// `owner` from the authenticated user.
#[derive(Debug, Clone)]
pub struct AddThreadCommand {
    pub payload: Value,
}

/// Handler for adding threads.
pub struct AddThreadHandler {
    threads: Arc<dyn ThreadRepository>,
}

impl AddThreadHandler {
    pub fn new(threads: Arc<dyn ThreadRepository>) -> Self {
        Self { threads }
    }

    pub async fn handle(&self, cmd: AddThreadCommand) -> Result<RegisteredThread, ForumError> {
        let registration = RegisterThread::from_payload(&cmd.payload)?;

        let added = self.threads.add_thread(&registration).await?;

        debug!(thread_id = %added.id(), owner = %added.owner(), "thread added");
        Ok(added)
    }
}
