//! definition/mod.rs
//! Field descriptors, the descriptor grammar and structure sizing.
//!
//! Notes:
//! - A descriptor is `TAG`, optionally followed by `[N]` and/or `|LE` / `|BE`
//!   in either order.
//! - Definitions are ordered: fields are laid out back to back in declaration order.
//! - Byte order left unspecified resolves against `CodecConfig::default_order`.

pub mod types;
pub mod parse;
pub mod size;

pub use types::*;
pub use parse::*;
pub use size::*;
