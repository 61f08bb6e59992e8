//! encode/engine.rs
//! Structure walk writing into a caller-supplied buffer.

use tracing::debug;

use crate::config::CodecConfig;
use crate::definition::{Descriptor, StructDefinition};
use crate::encode::primitives::write_field;
use crate::encode::types::{EncodeProgress, EncodeResult};
use crate::types::CodecError;
use crate::value::{Record, Value};

/// Encode `record` into `buffer` at `offset` with host default byte order.
/// The buffer is moved in and returned inside the result.
pub fn encode(
    buffer: Vec<u8>,
    def: &StructDefinition,
    record: &Record,
    offset: usize,
) -> Result<EncodeResult, CodecError> {
    encode_with(buffer, def, record, offset, &CodecConfig::default())
}

/// Owned variant of [`encode_into_with`].
pub fn encode_with(
    mut buffer: Vec<u8>,
    def: &StructDefinition,
    record: &Record,
    offset: usize,
    config: &CodecConfig,
) -> Result<EncodeResult, CodecError> {
    let EncodeProgress { end, error } = encode_into_with(&mut buffer, def, record, offset, config)?;
    Ok(EncodeResult { buffer, end, error })
}

/// Allocate a zeroed buffer of exactly `size_of(def)` bytes and encode into it.
pub fn encode_to_vec(def: &StructDefinition, record: &Record) -> Result<Vec<u8>, CodecError> {
    encode_to_vec_with(def, record, &CodecConfig::default())
}

pub fn encode_to_vec_with(
    def: &StructDefinition,
    record: &Record,
    config: &CodecConfig,
) -> Result<Vec<u8>, CodecError> {
    let buffer = vec![0u8; def.byte_size()];
    Ok(encode_with(buffer, def, record, 0, config)?.buffer)
}

/// Encode `record` into `buf` at `offset`.
///
/// # Errors
/// `MissingField` / `ValueMismatch` when the record does not match the
/// definition; nothing is written in that case. Running out of buffer is
/// not an error here: it stops the walk and sets `error` in the progress.
pub fn encode_into_with(
    buf: &mut [u8],
    def: &StructDefinition,
    record: &Record,
    offset: usize,
    config: &CodecConfig,
) -> Result<EncodeProgress, CodecError> {
    let values = check_record(def, record)?;
    let mut cursor = offset;

    for (field, value) in def.iter().zip(values) {
        let d = &field.descriptor;
        let stop = match cursor.checked_add(d.byte_len()) {
            Some(stop) if stop <= buf.len() => stop,
            _ => {
                debug!(
                    field = %field.name,
                    cursor,
                    need = d.byte_len(),
                    len = buf.len(),
                    "encode stopped: buffer too short for field"
                );
                return Ok(EncodeProgress { end: cursor, error: true });
            }
        };

        let order = d.resolved_order(config.default_order);
        write_field(&mut buf[cursor..stop], d, value, order);
        cursor = stop;
    }

    let expected = offset + def.byte_size();
    let error = cursor != expected;
    if error {
        debug!(end = cursor, expected, "encode size mismatch");
    }
    Ok(EncodeProgress { end: cursor, error })
}

/// Look up every field's value and check it against its descriptor.
fn check_record<'r>(
    def: &StructDefinition,
    record: &'r Record,
) -> Result<Vec<&'r Value>, CodecError> {
    def.iter()
        .map(|field| -> Result<&'r Value, CodecError> {
            let value = record.get(&field.name).ok_or_else(|| CodecError::MissingField {
                field: field.name.clone(),
            })?;
            check_shape(&field.name, &field.descriptor, value)?;
            Ok(value)
        })
        .collect()
}

fn check_shape(name: &str, d: &Descriptor, value: &Value) -> Result<(), CodecError> {
    let mismatch = |expected: String, found: String| CodecError::ValueMismatch {
        field: name.to_string(),
        expected,
        found,
    };

    if d.tag.is_char() {
        return match value {
            Value::Text(_) => Ok(()),
            other => Err(mismatch("text".into(), other.kind_name().into())),
        };
    }

    if !d.is_repeated() {
        return if value.is_numeric() {
            Ok(())
        } else {
            Err(mismatch(format!("number for {}", d.tag), value.kind_name().into()))
        };
    }

    let Value::List(items) = value else {
        return Err(mismatch(
            format!("list of {} {}", d.count, d.tag),
            value.kind_name().into(),
        ));
    };
    if items.len() != d.count as usize {
        return Err(mismatch(
            format!("list of {} {}", d.count, d.tag),
            format!("list of {}", items.len()),
        ));
    }
    match items.iter().find(|item| !item.is_numeric()) {
        Some(bad) => Err(mismatch(
            format!("list of {} {}", d.count, d.tag),
            format!("list containing {}", bad.kind_name()),
        )),
        None => Ok(()),
    }
}
