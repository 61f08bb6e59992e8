//! registry/lookup.rs
//! Tag name resolution.

use crate::constants::{tag_names, TAG_ALIASES};
use crate::registry::types::{TypeInfo, TypeTag};
use crate::types::CodecError;

/// Resolve a tag name (canonical or alias, any case) to its registry entry.
///
/// # Errors
/// `CodecError::UnsupportedType` when the name is outside the closed set.
pub fn resolve(name: &str) -> Result<TypeInfo, CodecError> {
    let upper = name.trim().to_ascii_uppercase();
    let canonical = canonical_name(&upper);

    let tag = match canonical {
        x if x == tag_names::CHAR    => TypeTag::Char,
        x if x == tag_names::INT8    => TypeTag::Int8,
        x if x == tag_names::UINT8   => TypeTag::UInt8,
        x if x == tag_names::INT16   => TypeTag::Int16,
        x if x == tag_names::UINT16  => TypeTag::UInt16,
        x if x == tag_names::INT24   => TypeTag::Int24,
        x if x == tag_names::UINT24  => TypeTag::UInt24,
        x if x == tag_names::INT32   => TypeTag::Int32,
        x if x == tag_names::UINT32  => TypeTag::UInt32,
        x if x == tag_names::INT64   => TypeTag::Int64,
        x if x == tag_names::UINT64  => TypeTag::UInt64,
        x if x == tag_names::FLOAT32 => TypeTag::Float32,
        x if x == tag_names::FLOAT64 => TypeTag::Float64,
        _ => {
            return Err(CodecError::UnsupportedType {
                tag: name.trim().to_string(),
            })
        }
    };

    Ok(tag.info())
}

/// Width in bytes of a tag name.
pub fn width_of(name: &str) -> Result<usize, CodecError> {
    resolve(name).map(|info| info.width)
}

/// True when `name` resolves to a registered tag.
pub fn is_supported(name: &str) -> bool {
    resolve(name).is_ok()
}

fn canonical_name(upper: &str) -> &str {
    TAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(upper)
}
