/// Error returned by an [`AllocationHook`](super::AllocationHook) that refuses a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("storage could not be obtained")]
pub struct AllocError;
