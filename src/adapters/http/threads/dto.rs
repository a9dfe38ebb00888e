//! Response bodies for thread endpoints.

use serde::Serialize;

use crate::application::ThreadView;
use crate::domain::thread::RegisteredThread;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadResponse {
    pub added_thread: RegisteredThread,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailResponse {
    pub thread: ThreadView,
}
