//! decode/primitives.rs
//! Byte -> value assembly for a single field.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::definition::{ByteOrder, Descriptor};
use crate::registry::{NumericKind, TypeTag};
use crate::value::Value;

#[inline]
pub fn read_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    match order {
        ByteOrder::Little => LittleEndian::read_uint(bytes, bytes.len()),
        ByteOrder::Big => BigEndian::read_uint(bytes, bytes.len()),
    }
}

/// Sign-extends from `bytes.len() * 8` bits.
#[inline]
pub fn read_int(bytes: &[u8], order: ByteOrder) -> i64 {
    match order {
        ByteOrder::Little => LittleEndian::read_int(bytes, bytes.len()),
        ByteOrder::Big => BigEndian::read_int(bytes, bytes.len()),
    }
}

/// One value of `tag` from exactly `tag.width()` bytes.
pub fn read_scalar(bytes: &[u8], tag: TypeTag, order: ByteOrder) -> Value {
    debug_assert_eq!(bytes.len(), tag.width());
    match tag.kind() {
        NumericKind::Char => Value::Text(latin1(bytes)),
        NumericKind::Unsigned => Value::UInt(read_uint(bytes, order)),
        NumericKind::Signed => Value::Int(read_int(bytes, order)),
        NumericKind::Float => {
            let bits = read_uint(bytes, order);
            if tag == TypeTag::Float32 {
                Value::Float32(f32::from_bits(bits as u32))
            } else {
                Value::Float(f64::from_bits(bits))
            }
        }
    }
}

/// Whole field from exactly `d.byte_len()` bytes.
///
/// CHAR fields always become text (one char per byte); other repeated
/// fields become a list, single ones a scalar.
pub fn read_field(bytes: &[u8], d: &Descriptor, order: ByteOrder) -> Value {
    debug_assert_eq!(bytes.len(), d.byte_len());
    if d.tag.is_char() {
        return Value::Text(latin1(bytes));
    }
    if !d.is_repeated() {
        return read_scalar(bytes, d.tag, order);
    }
    Value::List(
        bytes
            .chunks_exact(d.tag.width())
            .map(|chunk| read_scalar(chunk, d.tag, order))
            .collect(),
    )
}

#[inline]
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
