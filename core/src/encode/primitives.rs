//! encode/primitives.rs
//! Value -> byte splitting for a single field.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::definition::{ByteOrder, Descriptor};
use crate::registry::{NumericKind, TypeTag};
use crate::value::Value;

/// Write the low `out.len()` bytes of `bits`.
#[inline]
pub fn write_uint(out: &mut [u8], bits: u64, order: ByteOrder) {
    let width = out.len();
    let masked = if width < 8 { bits & ((1u64 << (width * 8)) - 1) } else { bits };
    match order {
        ByteOrder::Little => LittleEndian::write_uint(out, masked, width),
        ByteOrder::Big => BigEndian::write_uint(out, masked, width),
    }
}

/// Two's-complement bit pattern of a numeric value; floats truncate toward zero.
#[inline]
pub fn integer_bits(value: &Value) -> u64 {
    match *value {
        Value::Int(v) => v as u64,
        Value::UInt(v) => v,
        Value::Float(v) if v < 0.0 => v as i64 as u64,
        Value::Float(v) => v as u64,
        Value::Float32(v) if v < 0.0 => v as i64 as u64,
        Value::Float32(v) => v as u64,
        _ => 0,
    }
}

/// One value of `tag` into exactly `tag.width()` bytes.
pub fn write_scalar(out: &mut [u8], tag: TypeTag, value: &Value, order: ByteOrder) {
    debug_assert_eq!(out.len(), tag.width());
    match tag.kind() {
        NumericKind::Char => {
            let byte = value
                .as_str()
                .and_then(|s| s.chars().next())
                .map_or(0, |c| c as u32 as u8);
            out[0] = byte;
        }
        NumericKind::Signed | NumericKind::Unsigned => {
            write_uint(out, integer_bits(value), order);
        }
        NumericKind::Float => {
            let bits = match (tag, value) {
                (TypeTag::Float32, Value::Float32(v)) => u64::from(v.to_bits()),
                (TypeTag::Float32, other) => u64::from((other.as_f64().unwrap_or(0.0) as f32).to_bits()),
                (_, other) => other.as_f64().unwrap_or(0.0).to_bits(),
            };
            write_uint(out, bits, order);
        }
    }
}

/// Whole field into exactly `d.byte_len()` bytes.
///
/// CHAR text writes the low byte of each char, zero-padded or truncated to
/// the repeat count. Shapes are assumed checked by the caller.
pub fn write_field(out: &mut [u8], d: &Descriptor, value: &Value, order: ByteOrder) {
    debug_assert_eq!(out.len(), d.byte_len());
    if d.tag.is_char() {
        let text = value.as_str().unwrap_or("");
        let mut chars = text.chars();
        for slot in out.iter_mut() {
            *slot = chars.next().map_or(0, |c| c as u32 as u8);
        }
        return;
    }
    match value {
        Value::List(items) => {
            for (chunk, item) in out.chunks_exact_mut(d.tag.width()).zip(items) {
                write_scalar(chunk, d.tag, item, order);
            }
        }
        scalar => write_scalar(out, d.tag, scalar, order),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_int16_masks_to_width() {
        let mut out = [0u8; 2];
        write_scalar(&mut out, TypeTag::Int16, &Value::Int(-2), ByteOrder::Little);
        assert_eq!(out, [0xFE, 0xFF]);
    }

    #[test]
    fn oversized_value_wraps() {
        let mut out = [0u8; 1];
        write_scalar(&mut out, TypeTag::UInt8, &Value::UInt(0x1FF), ByteOrder::Big);
        assert_eq!(out, [0xFF]);
    }

    #[test]
    fn uint24_big_endian() {
        let mut out = [0u8; 3];
        write_scalar(&mut out, TypeTag::UInt24, &Value::UInt(0x010203), ByteOrder::Big);
        assert_eq!(out, [0x01, 0x02, 0x03]);
    }

    #[test]
    fn float_given_for_integer_truncates() {
        assert_eq!(integer_bits(&Value::Float(3.9)), 3);
        assert_eq!(integer_bits(&Value::Float(-3.9)) as i64, -3);
        assert_eq!(integer_bits(&Value::Float32(-7.5)) as i64, -7);
    }

    #[test]
    fn float32_bits_written_unchanged() {
        let mut out = [0u8; 4];
        let snan = Value::Float32(f32::from_bits(0x7F80_0001));
        write_scalar(&mut out, TypeTag::Float32, &snan, ByteOrder::Little);
        assert_eq!(out, [0x01, 0x00, 0x80, 0x7F]);
    }

    #[test]
    fn char_text_pads_and_truncates() {
        let d = Descriptor::new(TypeTag::Char).repeated(4);
        let mut out = [0xAAu8; 4];
        write_field(&mut out, &d, &Value::from("ab"), ByteOrder::Little);
        assert_eq!(out, [b'a', b'b', 0, 0]);
        write_field(&mut out, &d, &Value::from("abcdef"), ByteOrder::Little);
        assert_eq!(&out, b"abcd");
    }
}
