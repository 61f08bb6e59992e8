//! value/mod.rs
//! Decoded values and ordered records.

pub mod types;
pub mod record;

pub use types::*;
pub use record::*;
