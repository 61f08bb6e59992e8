//! decode/engine.rs
//! Structure walk over a borrowed buffer.

use tracing::debug;

use crate::config::CodecConfig;
use crate::decode::primitives::read_field;
use crate::decode::types::DecodeResult;
use crate::definition::StructDefinition;
use crate::value::Record;

/// Decode `def` from `buf` starting at `offset`, resolving unspecified byte
/// order to the host's.
pub fn decode(buf: &[u8], def: &StructDefinition, offset: usize) -> DecodeResult {
    decode_with(buf, def, offset, &CodecConfig::default())
}

/// Decode `def` from `buf` starting at `offset`.
///
/// Never fails: a short buffer yields the fields read so far, `end` at the
/// first field that did not fit and `error = true`.
pub fn decode_with(
    buf: &[u8],
    def: &StructDefinition,
    offset: usize,
    config: &CodecConfig,
) -> DecodeResult {
    let mut data = Record::with_capacity(def.len());
    let mut cursor = offset;

    for field in def {
        let d = &field.descriptor;
        let stop = match cursor.checked_add(d.byte_len()) {
            Some(stop) if stop <= buf.len() => stop,
            _ => {
                debug!(
                    field = %field.name,
                    cursor,
                    need = d.byte_len(),
                    len = buf.len(),
                    "decode stopped: buffer too short for field"
                );
                return DecodeResult { data, end: cursor, error: true };
            }
        };

        let order = d.resolved_order(config.default_order);
        data.insert(field.name.clone(), read_field(&buf[cursor..stop], d, order));
        cursor = stop;
    }

    let expected = offset + def.byte_size();
    let error = cursor != expected;
    if error {
        debug!(end = cursor, expected, "decode size mismatch");
    }

    DecodeResult { data, end: cursor, error }
}
