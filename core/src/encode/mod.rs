//! encode/mod.rs
//! Encode engine: record + structure definition -> bytes.
//!
//! Notes:
//! - Mirrors the decode walk: same field order, same cursor arithmetic.
//! - The record is checked against the definition before the first byte is
//!   written; a buffer that runs out mid-walk is a data error (`error = true`).
//! - Owned entry points move the buffer in and hand it back in the result.

pub mod types;
pub mod primitives;
pub mod engine;

pub use types::*;
pub use engine::*;
