use core::num::NonZeroUsize;

/// Fault-injection settings for [`AllocationHarness`](super::AllocationHarness).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarnessConfig {
  fail_every: Option<NonZeroUsize>,
  fail_next:  usize,
  noallocate: bool,
}

impl HarnessConfig {
  /// Creates a configuration that grants every request.
  #[must_use]
  pub const fn new() -> Self {
    Self { fail_every: None, fail_next: 0, noallocate: false }
  }

  /// Makes every `n`-th allocation request fail. `0` disables periodic failures.
  #[must_use]
  pub const fn with_fail_every(mut self, n: usize) -> Self {
    self.fail_every = NonZeroUsize::new(n);
    self
  }

  /// Makes the next `count` allocation requests fail.
  #[must_use]
  pub const fn with_fail_next(mut self, count: usize) -> Self {
    self.fail_next = count;
    self
  }

  /// Starts the harness with allocations disallowed.
  #[must_use]
  pub const fn with_noallocate(mut self, enabled: bool) -> Self {
    self.noallocate = enabled;
    self
  }

  /// Sets the periodic failure interval. `0` disables periodic failures.
  pub fn set_fail_every(&mut self, n: usize) {
    self.fail_every = NonZeroUsize::new(n);
  }

  /// Enables or disables no-allocate mode.
  pub fn set_noallocate(&mut self, enabled: bool) {
    self.noallocate = enabled;
  }

  /// Returns the periodic failure interval, if any.
  #[must_use]
  pub const fn fail_every(&self) -> Option<NonZeroUsize> {
    self.fail_every
  }

  /// Returns how many leading requests fail.
  #[must_use]
  pub const fn fail_next(&self) -> usize {
    self.fail_next
  }

  /// Returns whether allocations are disallowed.
  #[must_use]
  pub const fn noallocate(&self) -> bool {
    self.noallocate
  }
}
