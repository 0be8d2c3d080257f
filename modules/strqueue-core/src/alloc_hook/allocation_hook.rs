use super::AllocError;

/// Observer consulted before every allocation and notified after every release.
///
/// A hook that returns `Err` from [`on_allocate`](AllocationHook::on_allocate) makes the requesting
/// operation fail without mutating the queue. Every granted block is reported back exactly once
/// through [`on_release`](AllocationHook::on_release).
pub trait AllocationHook {
  /// Requests a block of `bytes` bytes.
  ///
  /// # Errors
  ///
  /// Returns [`AllocError`] when the block must not be allocated.
  fn on_allocate(&self, bytes: usize) -> Result<(), AllocError>;

  /// Reports that a block of `bytes` bytes has been released.
  fn on_release(&self, bytes: usize);
}

impl<H> AllocationHook for &H
where
  H: AllocationHook + ?Sized,
{
  fn on_allocate(&self, bytes: usize) -> Result<(), AllocError> {
    (**self).on_allocate(bytes)
  }

  fn on_release(&self, bytes: usize) {
    (**self).on_release(bytes);
  }
}
