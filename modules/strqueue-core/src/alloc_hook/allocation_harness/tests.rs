use super::*;

#[test]
fn granted_blocks_are_counted_until_released() {
  let harness = AllocationHarness::new();

  assert!(harness.on_allocate(16).is_ok());
  assert!(harness.on_allocate(4).is_ok());
  assert_eq!(harness.live_blocks(), 2);
  assert_eq!(harness.live_bytes(), 20);

  harness.on_release(16);
  assert_eq!(harness.live_blocks(), 1);
  assert_eq!(harness.live_bytes(), 4);
  assert_eq!(harness.allocations(), 2);
  assert_eq!(harness.releases(), 1);
}

#[test]
fn fail_every_refuses_periodic_requests() {
  let harness = AllocationHarness::with_config(HarnessConfig::new().with_fail_every(3));

  let outcomes: std::vec::Vec<bool> = (0..6).map(|_| harness.on_allocate(1).is_ok()).collect();
  assert_eq!(outcomes, [true, true, false, true, true, false]);
  assert_eq!(harness.failures(), 2);
  assert_eq!(harness.live_blocks(), 4);
}

#[test]
fn fail_next_refuses_leading_requests_only() {
  let harness = AllocationHarness::with_config(HarnessConfig::new().with_fail_next(2));

  assert_eq!(harness.on_allocate(1), Err(AllocError));
  assert_eq!(harness.on_allocate(1), Err(AllocError));
  assert_eq!(harness.on_allocate(1), Ok(()));

  harness.fail_next(1);
  assert_eq!(harness.on_allocate(1), Err(AllocError));
  assert_eq!(harness.on_allocate(1), Ok(()));
}

#[test]
fn noallocate_mode_records_violations() {
  let harness = AllocationHarness::new();
  assert!(harness.on_allocate(8).is_ok());

  harness.set_noallocate(true);
  assert_eq!(harness.on_allocate(8), Err(AllocError));
  harness.on_release(8);
  assert_eq!(harness.violations(), 2);
  assert_eq!(harness.live_blocks(), 0);

  harness.set_noallocate(false);
  assert!(harness.on_allocate(8).is_ok());
  assert_eq!(harness.violations(), 2);
}

#[test]
fn set_fail_every_zero_disables_injection() {
  let harness = AllocationHarness::with_config(HarnessConfig::new().with_fail_every(1));
  assert!(harness.on_allocate(1).is_err());

  harness.set_fail_every(0);
  assert_eq!(harness.config().fail_every(), None);
  assert!(harness.on_allocate(1).is_ok());
}

#[test]
fn shared_reference_acts_as_hook() {
  fn request<H: AllocationHook>(hook: H) -> Result<(), AllocError> {
    hook.on_allocate(32)
  }

  let harness = AllocationHarness::new();
  assert!(request(&harness).is_ok());
  assert_eq!(harness.live_bytes(), 32);
}
