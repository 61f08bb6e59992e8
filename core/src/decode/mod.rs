//! decode/mod.rs
//! Decode engine: buffer + structure definition -> record.
//!
//! Notes:
//! - Fields are read in declaration order from a cursor starting at `offset`.
//! - A field that does not fit stops the walk; the partial record is returned
//!   with `error = true` and `end` at that field's offset.
//! - Floats reinterpret the assembled bit pattern (IEEE-754), never scale it.

pub mod types;
pub mod primitives;
pub mod engine;

pub use types::*;
pub use engine::*;
