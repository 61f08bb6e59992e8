//! definition/parse.rs
//! Descriptor grammar: `TAG([N])?(|LE|BE)?` or `TAG(|LE|BE)?([N])?`.
//!
//! The match is lenient. Anything after the recognised prefix is ignored,
//! and a missing, malformed or zero repeat count reads as 1.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{DEFAULT_REPEAT, ORDER_BE, ORDER_LE};
use crate::definition::types::{ByteOrder, Descriptor};
use crate::registry;
use crate::types::CodecError;

fn descriptor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:\[([^\]]*)\])?\s*(?:\|\s*([A-Za-z]*))?\s*(?:\[([^\]]*)\])?",
        )
        .expect("descriptor pattern is a valid regex")
    })
}

/// Raw pieces of a descriptor before the tag is checked against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorParts<'a> {
    pub tag: &'a str,
    pub count: u32,
    pub order: Option<ByteOrder>,
}

/// Split a descriptor into tag text, repeat count and order modifier.
/// Never fails; input without a recognisable tag yields the trimmed text as tag.
pub fn split_descriptor(text: &str) -> DescriptorParts<'_> {
    let Some(caps) = descriptor_pattern().captures(text) else {
        return DescriptorParts {
            tag: text.trim(),
            count: DEFAULT_REPEAT,
            order: None,
        };
    };

    let tag = caps.get(1).map_or("", |m| m.as_str());
    let count = caps
        .get(2)
        .or_else(|| caps.get(4))
        .map_or(DEFAULT_REPEAT, |m| parse_count(m.as_str()));
    let order = caps.get(3).and_then(|m| parse_order(m.as_str()));

    DescriptorParts { tag, count, order }
}

/// Parse one descriptor into a typed [`Descriptor`].
///
/// # Errors
/// `CodecError::UnsupportedType` when the tag is not registered.
pub fn parse_descriptor(text: &str) -> Result<Descriptor, CodecError> {
    let parts = split_descriptor(text);
    let info = registry::resolve(parts.tag)?;
    Ok(Descriptor {
        tag: info.tag,
        count: parts.count,
        order: parts.order,
    })
}

/// Tag, repeat count and resolved little-endian flag, with an absent
/// modifier falling back to `default`.
pub fn parse_resolved(text: &str, default: ByteOrder) -> Result<(Descriptor, bool), CodecError> {
    let d = parse_descriptor(text)?;
    Ok((d, d.resolved_order(default).is_little()))
}

fn parse_count(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_REPEAT,
        Ok(n) => n,
    }
}

fn parse_order(raw: &str) -> Option<ByteOrder> {
    if raw.eq_ignore_ascii_case(ORDER_LE) {
        Some(ByteOrder::Little)
    } else if raw.eq_ignore_ascii_case(ORDER_BE) {
        Some(ByteOrder::Big)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeTag;

    #[test]
    fn bare_tag() {
        let d = parse_descriptor("UINT16").unwrap();
        assert_eq!(d, Descriptor::new(TypeTag::UInt16));
    }

    #[test]
    fn count_then_order_equals_order_then_count() {
        let a = parse_descriptor("INT32[4]|BE").unwrap();
        let b = parse_descriptor("INT32|BE[4]").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count, 4);
        assert_eq!(a.order, Some(ByteOrder::Big));
    }

    #[test]
    fn modifiers_are_case_insensitive() {
        let d = parse_descriptor("float64|le").unwrap();
        assert_eq!(d.tag, TypeTag::Float64);
        assert_eq!(d.order, Some(ByteOrder::Little));
    }

    #[test]
    fn lenient_count() {
        assert_eq!(parse_descriptor("CHAR[abc]").unwrap().count, 1);
        assert_eq!(parse_descriptor("CHAR[0]").unwrap().count, 1);
        assert_eq!(parse_descriptor("CHAR[]").unwrap().count, 1);
        assert_eq!(parse_descriptor("CHAR[ 12 ]").unwrap().count, 12);
        assert_eq!(parse_descriptor("CHAR[99999999999]").unwrap().count, 1);
    }

    #[test]
    fn unknown_order_modifier_is_ignored() {
        let d = parse_descriptor("UINT32|XE").unwrap();
        assert_eq!(d.order, None);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        let d = parse_descriptor("UINT8[2]|BE  whatever").unwrap();
        assert_eq!(d.count, 2);
        assert_eq!(d.order, Some(ByteOrder::Big));
    }

    #[test]
    fn unmatched_text_is_unsupported() {
        assert!(matches!(
            parse_descriptor("[3]"),
            Err(CodecError::UnsupportedType { .. })
        ));
        assert!(matches!(
            parse_descriptor("VARINT"),
            Err(CodecError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn resolved_flag_falls_back_to_default() {
        let (_, le) = parse_resolved("UINT16", ByteOrder::Big).unwrap();
        assert!(!le);
        let (_, le) = parse_resolved("UINT16|LE", ByteOrder::Big).unwrap();
        assert!(le);
    }

    #[test]
    fn display_is_canonical() {
        let d = parse_descriptor("short|be[3]").unwrap();
        assert_eq!(d.to_string(), "INT16[3]|BE");
        assert_eq!(parse_descriptor(&d.to_string()).unwrap(), d);
    }
}
