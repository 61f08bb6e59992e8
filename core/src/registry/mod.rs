//! registry/mod.rs
//! Closed set of primitive field types.
//!
//! Notes:
//! - Membership is closed: an unknown tag is a schema error, never a data error.
//! - Aliases ("SHORT", "DWORD", ...) resolve to a canonical tag of the same width.

pub mod types;
pub mod lookup;

pub use types::*;
pub use lookup::*;
