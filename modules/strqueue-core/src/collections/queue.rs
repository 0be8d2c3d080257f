//! Singly linked string queue.

mod node;
mod queue_error;
mod str_queue;

/// Free functions accepting absent queue handles.
pub mod nullable;

pub use queue_error::QueueError;
pub use str_queue::StrQueue;
