//! Allocation instrumentation.
//!
//! The queue reports every block it obtains or releases to an [`AllocationHook`]. The default
//! [`SystemAllocation`] grants every request. [`AllocationHarness`] keeps counters, injects failures
//! and can forbid allocation altogether, which is how the queue's storage discipline is verified.

mod alloc_error;
mod allocation_harness;
mod allocation_hook;
mod harness_config;
mod system_allocation;

pub use alloc_error::AllocError;
pub use allocation_harness::AllocationHarness;
pub use allocation_hook::AllocationHook;
pub use harness_config::HarnessConfig;
pub use system_allocation::SystemAllocation;
