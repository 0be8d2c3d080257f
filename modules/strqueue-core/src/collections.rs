//! Collection modules exposed by `strqueue-core-rs`.

/// Linked-list string queue and its absent-tolerant API.
pub mod queue;
