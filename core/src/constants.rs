//! Stable tag names, widths and alias table.

/// Canonical tag names (upper case, as written in descriptors).
pub mod tag_names {
    pub const CHAR: &str    = "CHAR";
    pub const INT8: &str    = "INT8";
    pub const UINT8: &str   = "UINT8";
    pub const INT16: &str   = "INT16";
    pub const UINT16: &str  = "UINT16";
    pub const INT24: &str   = "INT24";
    pub const UINT24: &str  = "UINT24";
    pub const INT32: &str   = "INT32";
    pub const UINT32: &str  = "UINT32";
    pub const INT64: &str   = "INT64";
    pub const UINT64: &str  = "UINT64";
    pub const FLOAT32: &str = "FLOAT32";
    pub const FLOAT64: &str = "FLOAT64";
}

/// Format-intent aliases. Each one resolves to a canonical tag of the same width.
pub const TAG_ALIASES: &[(&str, &str)] = &[
    ("BYTE",     tag_names::UINT8),
    ("SBYTE",    tag_names::INT8),
    ("SHORT",    tag_names::INT16),
    ("USHORT",   tag_names::UINT16),
    ("WORD",     tag_names::UINT16),
    ("INT",      tag_names::INT32),
    ("UINT",     tag_names::UINT32),
    ("LONG",     tag_names::INT32),
    ("ULONG",    tag_names::UINT32),
    ("DWORD",    tag_names::UINT32),
    ("LONGLONG", tag_names::INT64),
    ("QWORD",    tag_names::UINT64),
    ("FLOAT",    tag_names::FLOAT32),
    ("DOUBLE",   tag_names::FLOAT64),
];

/// Repeat count used when a descriptor carries none (or an unusable one).
pub const DEFAULT_REPEAT: u32 = 1;

/// Largest primitive width in bytes.
pub const MAX_WIDTH: usize = 8;

/// Byte-order modifiers accepted after `|`.
pub const ORDER_LE: &str = "LE";
pub const ORDER_BE: &str = "BE";
