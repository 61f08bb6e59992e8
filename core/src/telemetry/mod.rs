//! telemetry/mod.rs
//! Operation counters and immutable snapshots.
//!
//! Notes:
//! - Workers keep their own counters and merge them into a shared total.
//! - Snapshots are plain data (serde) so they can be logged or exported.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
