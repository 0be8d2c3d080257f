use alloc::{boxed::Box, string::String};
use core::{mem, ptr::NonNull};

use super::QueueError;
use crate::alloc_hook::AllocationHook;

/// One link of the chain: an owned copy of the element and the link to its successor.
///
/// Linked nodes are owned by the queue through raw pointers obtained from [`Node::link`] and are
/// reclaimed only through [`Node::unlink`].
pub(crate) struct Node {
  pub(crate) value: String,
  pub(crate) next:  Option<NonNull<Node>>,
}

impl Node {
  const FOOTPRINT: usize = mem::size_of::<Node>();

  /// Allocates a detached node holding a copy of `value`.
  ///
  /// The node block is requested before the string block. If the string block is refused the node
  /// block is handed back, so a failed call leaves the hook balanced.
  pub(crate) fn allocate<A: AllocationHook>(hook: &A, value: &str) -> Result<Box<Self>, QueueError> {
    hook.on_allocate(Self::FOOTPRINT)?;
    match copy_value(hook, value) {
      | Ok(value) => Ok(Box::new(Self { value, next: None })),
      | Err(error) => {
        hook.on_release(Self::FOOTPRINT);
        Err(error)
      },
    }
  }

  /// Hands ownership of `node` over to the chain.
  pub(crate) fn link(node: Box<Self>) -> NonNull<Self> {
    NonNull::from(Box::leak(node))
  }

  /// Takes ownership of a linked node back from the chain.
  ///
  /// # Safety
  ///
  /// `node` must come from [`Node::link`], must not have been unlinked yet, and no reference into it
  /// may be alive.
  pub(crate) unsafe fn unlink(node: NonNull<Self>) -> Box<Self> {
    // SAFETY: `node` was produced by `Box::leak` and ownership is returned exactly once.
    unsafe { Box::from_raw(node.as_ptr()) }
  }

  /// Consumes a detached node, reporting both of its blocks as released.
  pub(crate) fn release<A: AllocationHook>(self: Box<Self>, hook: &A) -> String {
    let Self { value, next } = *self;
    debug_assert!(next.is_none(), "released node must be detached");
    hook.on_release(value.len());
    hook.on_release(Self::FOOTPRINT);
    value
  }
}

fn copy_value<A: AllocationHook>(hook: &A, value: &str) -> Result<String, QueueError> {
  hook.on_allocate(value.len())?;
  let mut copy = String::new();
  if copy.try_reserve_exact(value.len()).is_err() {
    hook.on_release(value.len());
    return Err(QueueError::AllocError);
  }
  copy.push_str(value);
  Ok(copy)
}

/// Copies `value` into `buffer` as a zero-terminated byte string.
///
/// At most `buffer.len() - 1` bytes are copied and every byte after them is zeroed. An empty buffer
/// has no room for the terminator and is left untouched.
pub(crate) fn copy_terminated(value: &str, buffer: &mut [u8]) {
  let Some(limit) = buffer.len().checked_sub(1) else {
    return;
  };
  let copied = value.len().min(limit);
  let (prefix, rest) = buffer.split_at_mut(copied);
  prefix.copy_from_slice(&value.as_bytes()[..copied]);
  rest.fill(0);
}
