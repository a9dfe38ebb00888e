//! Thread domain module.
//!
//! Threads are top-level discussion posts. This module holds the stored
//! aggregate plus the validated input and output views used by the
//! application layer.

mod aggregate;
mod register_thread;
mod registered_thread;
mod thread_detail;

pub use aggregate::Thread;
pub use register_thread::RegisterThread;
pub use registered_thread::RegisteredThread;
pub use thread_detail::ThreadDetail;
