//! Operations over optional queue handles.
//!
//! Each function accepts `None` where a queue is expected and treats it as a defined zero-effect case:
//! inserts and removals report `false`, [`size`] reports `0`, and [`reverse`] and [`destroy`] do
//! nothing. Failures never panic; they are reported through the boolean results.

use super::StrQueue;
use crate::alloc_hook::AllocationHook;

#[cfg(test)]
mod tests;

/// Creates an empty queue, or `None` when its storage cannot be obtained.
#[must_use]
pub fn create() -> Option<StrQueue> {
  StrQueue::new().ok()
}

/// Creates an empty queue reporting to `hook`, or `None` when the hook refuses it.
#[must_use]
pub fn create_with_hook<A: AllocationHook>(hook: A) -> Option<StrQueue<A>> {
  StrQueue::with_hook(hook).ok()
}

/// Releases every element and then the queue itself.
pub fn destroy<A: AllocationHook>(queue: Option<StrQueue<A>>) {
  drop(queue);
}

/// Inserts a copy of `value` at the head. Returns `false` when absent or out of storage.
pub fn insert_head<A: AllocationHook>(queue: Option<&mut StrQueue<A>>, value: &str) -> bool {
  let Some(queue) = queue else {
    return false;
  };
  queue.insert_head(value).is_ok()
}

/// Inserts a copy of `value` at the tail. Returns `false` when absent or out of storage.
pub fn insert_tail<A: AllocationHook>(queue: Option<&mut StrQueue<A>>, value: &str) -> bool {
  let Some(queue) = queue else {
    return false;
  };
  queue.insert_tail(value).is_ok()
}

/// Removes the head element, copying it into `buffer` when one is supplied.
///
/// Returns `false` when the queue is absent or empty. See [`StrQueue::remove_head_into`] for how
/// the copy is truncated and terminated.
pub fn remove_head<A: AllocationHook>(queue: Option<&mut StrQueue<A>>, buffer: Option<&mut [u8]>) -> bool {
  let Some(queue) = queue else {
    return false;
  };
  queue.remove_head_into(buffer).is_ok()
}

/// Returns the number of elements, `0` when absent.
#[must_use]
pub fn size<A: AllocationHook>(queue: Option<&StrQueue<A>>) -> usize {
  queue.map_or(0, |queue| queue.len())
}

/// Reverses the elements in place. Does nothing when absent.
pub fn reverse<A: AllocationHook>(queue: Option<&mut StrQueue<A>>) {
  if let Some(queue) = queue {
    queue.reverse();
  }
}
