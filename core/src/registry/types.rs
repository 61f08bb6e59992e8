use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::tag_names;
use crate::types::CodecError;

/// Numeric interpretation of a tag's bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    Char,
    Signed,
    Unsigned,
    Float,
}

/// Canonical primitive type tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Char,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int24,
    UInt24,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl TypeTag {
    pub const ALL: [TypeTag; 13] = [
        TypeTag::Char,
        TypeTag::Int8,
        TypeTag::UInt8,
        TypeTag::Int16,
        TypeTag::UInt16,
        TypeTag::Int24,
        TypeTag::UInt24,
        TypeTag::Int32,
        TypeTag::UInt32,
        TypeTag::Int64,
        TypeTag::UInt64,
        TypeTag::Float32,
        TypeTag::Float64,
    ];

    /// Width of one value in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            TypeTag::Char | TypeTag::Int8 | TypeTag::UInt8 => 1,
            TypeTag::Int16 | TypeTag::UInt16 => 2,
            TypeTag::Int24 | TypeTag::UInt24 => 3,
            TypeTag::Int32 | TypeTag::UInt32 | TypeTag::Float32 => 4,
            TypeTag::Int64 | TypeTag::UInt64 | TypeTag::Float64 => 8,
        }
    }

    #[inline]
    pub const fn kind(self) -> NumericKind {
        match self {
            TypeTag::Char => NumericKind::Char,
            TypeTag::Int8 | TypeTag::Int16 | TypeTag::Int24 | TypeTag::Int32 | TypeTag::Int64 => {
                NumericKind::Signed
            }
            TypeTag::UInt8
            | TypeTag::UInt16
            | TypeTag::UInt24
            | TypeTag::UInt32
            | TypeTag::UInt64 => NumericKind::Unsigned,
            TypeTag::Float32 | TypeTag::Float64 => NumericKind::Float,
        }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        (self.width() * 8) as u32
    }

    #[inline]
    pub const fn is_char(self) -> bool {
        matches!(self, TypeTag::Char)
    }

    /// Canonical descriptor spelling.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Char => tag_names::CHAR,
            TypeTag::Int8 => tag_names::INT8,
            TypeTag::UInt8 => tag_names::UINT8,
            TypeTag::Int16 => tag_names::INT16,
            TypeTag::UInt16 => tag_names::UINT16,
            TypeTag::Int24 => tag_names::INT24,
            TypeTag::UInt24 => tag_names::UINT24,
            TypeTag::Int32 => tag_names::INT32,
            TypeTag::UInt32 => tag_names::UINT32,
            TypeTag::Int64 => tag_names::INT64,
            TypeTag::UInt64 => tag_names::UINT64,
            TypeTag::Float32 => tag_names::FLOAT32,
            TypeTag::Float64 => tag_names::FLOAT64,
        }
    }

    pub fn info(self) -> TypeInfo {
        TypeInfo {
            tag: self,
            width: self.width(),
            kind: self.kind(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::lookup::resolve(s).map(|info| info.tag)
    }
}

/// Registry answer for one tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub tag: TypeTag,
    pub width: usize,
    pub kind: NumericKind,
}
