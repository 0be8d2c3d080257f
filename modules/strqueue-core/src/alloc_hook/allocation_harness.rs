use core::cell::Cell;

use super::{AllocError, AllocationHook, HarnessConfig};

#[cfg(test)]
mod tests;

/// Counting hook with fault injection.
///
/// Tracks the blocks currently held through it, fails requests according to its
/// [`HarnessConfig`], and records a violation for every allocation or release attempted while
/// no-allocate mode is on. Interior mutability keeps the hook usable through a shared reference, so
/// a test can hand `&harness` to a queue and keep inspecting the counters.
#[derive(Debug, Default)]
pub struct AllocationHarness {
  config:           Cell<HarnessConfig>,
  requests:         Cell<usize>,
  pending_failures: Cell<usize>,
  live_blocks:      Cell<usize>,
  live_bytes:       Cell<usize>,
  allocations:      Cell<usize>,
  releases:         Cell<usize>,
  failures:         Cell<usize>,
  violations:       Cell<usize>,
}

impl AllocationHarness {
  /// Creates a harness that grants every request.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(HarnessConfig::new())
  }

  /// Creates a harness driven by `config`.
  #[must_use]
  pub fn with_config(config: HarnessConfig) -> Self {
    let harness = Self::default();
    harness.pending_failures.set(config.fail_next());
    harness.config.set(config);
    harness
  }

  /// Returns the active configuration.
  #[must_use]
  pub fn config(&self) -> HarnessConfig {
    self.config.get()
  }

  /// Enables or disables no-allocate mode.
  pub fn set_noallocate(&self, enabled: bool) {
    let mut config = self.config.get();
    config.set_noallocate(enabled);
    self.config.set(config);
  }

  /// Sets the periodic failure interval. `0` disables periodic failures.
  pub fn set_fail_every(&self, n: usize) {
    let mut config = self.config.get();
    config.set_fail_every(n);
    self.config.set(config);
  }

  /// Makes the next `count` allocation requests fail.
  pub fn fail_next(&self, count: usize) {
    self.pending_failures.set(count);
  }

  /// Number of granted blocks not yet released.
  #[must_use]
  pub fn live_blocks(&self) -> usize {
    self.live_blocks.get()
  }

  /// Total size of granted blocks not yet released.
  #[must_use]
  pub fn live_bytes(&self) -> usize {
    self.live_bytes.get()
  }

  /// Number of granted allocation requests.
  #[must_use]
  pub fn allocations(&self) -> usize {
    self.allocations.get()
  }

  /// Number of reported releases.
  #[must_use]
  pub fn releases(&self) -> usize {
    self.releases.get()
  }

  /// Number of requests refused by fault injection.
  #[must_use]
  pub fn failures(&self) -> usize {
    self.failures.get()
  }

  /// Number of allocations or releases attempted in no-allocate mode.
  #[must_use]
  pub fn violations(&self) -> usize {
    self.violations.get()
  }

  fn should_fail(&self) -> bool {
    let request = self.requests.get() + 1;
    self.requests.set(request);

    let pending = self.pending_failures.get();
    if pending > 0 {
      self.pending_failures.set(pending - 1);
      return true;
    }

    self.config.get().fail_every().is_some_and(|n| request % n.get() == 0)
  }

  fn record_violation(&self, bytes: usize, action: &'static str) {
    self.violations.set(self.violations.get() + 1);
    tracing::error!(bytes, action, "storage operation attempted while allocations are disallowed");
  }
}

impl AllocationHook for AllocationHarness {
  fn on_allocate(&self, bytes: usize) -> Result<(), AllocError> {
    if self.config.get().noallocate() {
      self.record_violation(bytes, "allocate");
      return Err(AllocError);
    }

    if self.should_fail() {
      self.failures.set(self.failures.get() + 1);
      return Err(AllocError);
    }

    self.live_blocks.set(self.live_blocks.get() + 1);
    self.live_bytes.set(self.live_bytes.get() + bytes);
    self.allocations.set(self.allocations.get() + 1);
    Ok(())
  }

  fn on_release(&self, bytes: usize) {
    if self.config.get().noallocate() {
      self.record_violation(bytes, "release");
    }

    self.live_blocks.set(self.live_blocks.get().saturating_sub(1));
    self.live_bytes.set(self.live_bytes.get().saturating_sub(bytes));
    self.releases.set(self.releases.get() + 1);
  }
}
