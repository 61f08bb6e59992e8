//! bytefields-core
//!
//! Schema-driven conversion between raw byte buffers and named records.
//! A structure definition (field name -> `TAG[N]|LE` descriptor) is parsed
//! once and then used to decode, encode and search any number of buffers.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Schema
pub mod registry;
pub mod definition;
pub mod value;

// Engines
pub mod decode;
pub mod encode;
pub mod search;
pub mod codec;

// Surroundings
pub mod capabilities;
pub mod telemetry;
pub mod worker;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::StructCodec;
    pub use crate::config::CodecConfig;
    pub use crate::decode::{decode, DecodeResult};
    pub use crate::definition::{size_of, ByteOrder, Descriptor, StructDefinition};
    pub use crate::encode::{encode, encode_to_vec, EncodeResult};
    pub use crate::registry::{TypeInfo, TypeTag};
    pub use crate::search::{search, Pattern};
    pub use crate::types::CodecError;
    pub use crate::value::{Record, Value};
}
