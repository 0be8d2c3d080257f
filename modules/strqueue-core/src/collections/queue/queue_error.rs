use crate::alloc_hook::AllocError;

/// Errors reported by [`StrQueue`](super::StrQueue) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
  /// The queue has no element to remove.
  #[error("queue is empty")]
  Empty,
  /// Storage for the queue or an element could not be obtained.
  #[error("storage could not be obtained")]
  AllocError,
}

impl From<AllocError> for QueueError {
  fn from(_: AllocError) -> Self {
    QueueError::AllocError
  }
}
