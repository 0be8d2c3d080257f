use alloc::{boxed::Box, string::String};
use core::{fmt, mem, ptr::NonNull};

use super::{
  node::{copy_terminated, Node},
  QueueError,
};
use crate::alloc_hook::{AllocationHook, SystemAllocation};


/// Head and tail of a non-empty chain.
///
/// The chain owns every node reachable from `head` through the `next` links; each of them was handed
/// over with [`Node::link`] and is reclaimed with [`Node::unlink`]. `tail` aliases the last of those
/// nodes and is used only to append; it never frees anything.
#[derive(Clone, Copy)]
struct Chain {
  head: NonNull<Node>,
  tail: NonNull<Node>,
}

impl Chain {
  const fn single(node: NonNull<Node>) -> Self {
    Self { head: node, tail: node }
  }
}

/// Singly linked queue of strings.
///
/// Elements are inserted at either end and removed from the head. [`reverse`](StrQueue::reverse)
/// relinks the existing nodes in place, which turns head insertion plus head removal into stack
/// order and tail insertion plus a reversal into the opposite order.
///
/// Each element occupies two blocks reported to the hook `A` (the node and its string copy); the
/// queue itself occupies one more, obtained in [`with_hook`](StrQueue::with_hook) and released on
/// drop.
pub struct StrQueue<A: AllocationHook = SystemAllocation> {
  chain: Option<Chain>,
  len:   usize,
  hook:  A,
}

// SAFETY: every node is owned exclusively by the queue and reachable only through it; `tail` only
// ever points into the queue's own chain.
unsafe impl<A: AllocationHook + Send> Send for StrQueue<A> {}

impl StrQueue<SystemAllocation> {
  /// Creates an empty queue backed by the system allocator.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] when the queue structure cannot be obtained.
  pub fn new() -> Result<Self, QueueError> {
    Self::with_hook(SystemAllocation)
  }
}

impl<A: AllocationHook> StrQueue<A> {
  const FOOTPRINT: usize = mem::size_of::<Self>();

  /// Creates an empty queue that reports its storage to `hook`.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] when the hook refuses the queue structure.
  pub fn with_hook(hook: A) -> Result<Self, QueueError> {
    if let Err(error) = hook.on_allocate(Self::FOOTPRINT) {
      tracing::debug!(%error, "queue structure could not be obtained");
      return Err(error.into());
    }
    Ok(Self { chain: None, len: 0, hook })
  }

  /// Returns the installed allocation hook.
  #[must_use]
  pub const fn hook(&self) -> &A {
    &self.hook
  }

  /// Returns the number of elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the queue holds no element.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the element at the head.
  #[must_use]
  pub fn front(&self) -> Option<&str> {
    self.chain.as_ref().map(|chain| {
      // SAFETY: `head` is a linked node owned by the chain, alive for as long as `self`.
      let head = unsafe { chain.head.as_ref() };
      head.value.as_str()
    })
  }

  /// Returns the element at the tail.
  #[must_use]
  pub fn back(&self) -> Option<&str> {
    self.chain.as_ref().map(|chain| {
      // SAFETY: `tail` is a linked node owned by the chain, alive for as long as `self`.
      let tail = unsafe { chain.tail.as_ref() };
      tail.value.as_str()
    })
  }

  /// Inserts a copy of `value` at the head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] when storage for the element cannot be obtained. The queue
  /// is left unchanged.
  pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
    let mut node = self.allocate_node(value)?;
    match self.chain.as_mut() {
      | Some(chain) => {
        node.next = Some(chain.head);
        chain.head = Node::link(node);
      },
      | None => self.chain = Some(Chain::single(Node::link(node))),
    }
    self.len += 1;
    Ok(())
  }

  /// Inserts a copy of `value` at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] when storage for the element cannot be obtained. The queue
  /// is left unchanged.
  pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
    let node = Node::link(self.allocate_node(value)?);
    match self.chain.as_mut() {
      | Some(chain) => {
        // SAFETY: `tail` is a linked node owned by the chain. `self` is borrowed mutably, so no
        // other reference into the chain exists.
        unsafe { (*chain.tail.as_ptr()).next = Some(node) };
        chain.tail = node;
      },
      | None => self.chain = Some(Chain::single(node)),
    }
    self.len += 1;
    Ok(())
  }

  /// Removes the head element and returns it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove.
  pub fn pop_head(&mut self) -> Result<String, QueueError> {
    let node = self.detach_head()?;
    Ok(node.release(&self.hook))
  }

  /// Removes the head element, copying it into `buffer` when one is supplied.
  ///
  /// The copy holds at most `buffer.len() - 1` bytes followed by a zero terminator; the rest of the
  /// buffer is zeroed. Callers must supply at least one byte: an empty buffer receives nothing.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove. The buffer is not touched.
  pub fn remove_head_into(&mut self, buffer: Option<&mut [u8]>) -> Result<(), QueueError> {
    let value = self.pop_head()?;
    if let Some(buffer) = buffer {
      copy_terminated(&value, buffer);
    }
    Ok(())
  }

  /// Reverses the order of the elements in place.
  ///
  /// Only the `next` links are rewritten: no node is allocated, released or copied, and the hook is
  /// never consulted.
  pub fn reverse(&mut self) {
    if self.len < 2 {
      return;
    }
    let Some(chain) = self.chain.as_mut() else {
      return;
    };

    let mut previous: Option<NonNull<Node>> = None;
    let mut current = Some(chain.head);
    while let Some(node) = current {
      // SAFETY: every node reached from `head` is linked and owned by the chain; this is the only
      // reference to it while the links are rewritten.
      let node_ref = unsafe { &mut *node.as_ptr() };
      current = node_ref.next;
      node_ref.next = previous;
      previous = Some(node);
    }
    debug_assert!(previous == Some(chain.tail), "former tail must become the head");
    mem::swap(&mut chain.head, &mut chain.tail);

    tracing::trace!(len = self.len, "queue reversed");
  }

  fn allocate_node(&self, value: &str) -> Result<Box<Node>, QueueError> {
    Node::allocate(&self.hook, value).inspect_err(|error| {
      tracing::warn!(len = value.len(), %error, "element storage could not be obtained");
    })
  }

  fn detach_head(&mut self) -> Result<Box<Node>, QueueError> {
    let Chain { head, tail } = self.chain.take().ok_or(QueueError::Empty)?;
    // SAFETY: `head` is linked and owned by the chain, which has just been taken out of `self`;
    // the only other pointer to it is `tail` when it is the last node, and that is dropped below.
    let mut node = unsafe { Node::unlink(head) };
    if let Some(next) = node.next.take() {
      self.chain = Some(Chain { head: next, tail });
    }
    self.len -= 1;
    Ok(node)
  }
}

impl<A: AllocationHook> Drop for StrQueue<A> {
  fn drop(&mut self) {
    while self.pop_head().is_ok() {}
    self.hook.on_release(Self::FOOTPRINT);
  }
}

impl<A: AllocationHook> fmt::Debug for StrQueue<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut list = f.debug_list();
    let mut cursor = self.chain.map(|chain| chain.head);
    while let Some(node) = cursor {
      // SAFETY: every node reached from `head` is linked and owned by the chain, alive for as long
      // as `self`.
      let node = unsafe { node.as_ref() };
      list.entry(&node.value);
      cursor = node.next;
    }
    list.finish()
  }
}
