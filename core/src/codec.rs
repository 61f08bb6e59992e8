//! codec.rs
//! `StructCodec`: the engines bound to one `CodecConfig`.

use crate::config::CodecConfig;
use crate::decode::{decode_with, DecodeResult};
use crate::definition::StructDefinition;
use crate::encode::{encode_into_with, encode_to_vec_with, encode_with, EncodeProgress, EncodeResult};
use crate::search::{self, Pattern};
use crate::types::CodecError;
use crate::value::Record;

/// Decode / encode / search with a fixed configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StructCodec {
    config: CodecConfig,
}

impl StructCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode(&self, buf: &[u8], def: &StructDefinition, offset: usize) -> DecodeResult {
        decode_with(buf, def, offset, &self.config)
    }

    pub fn encode(
        &self,
        buffer: Vec<u8>,
        def: &StructDefinition,
        record: &Record,
        offset: usize,
    ) -> Result<EncodeResult, CodecError> {
        encode_with(buffer, def, record, offset, &self.config)
    }

    pub fn encode_into(
        &self,
        buf: &mut [u8],
        def: &StructDefinition,
        record: &Record,
        offset: usize,
    ) -> Result<EncodeProgress, CodecError> {
        encode_into_with(buf, def, record, offset, &self.config)
    }

    pub fn encode_to_vec(&self, def: &StructDefinition, record: &Record) -> Result<Vec<u8>, CodecError> {
        encode_to_vec_with(def, record, &self.config)
    }

    pub fn search<'p>(&self, buf: &[u8], pattern: impl Into<Pattern<'p>>, offset: usize) -> Option<usize> {
        search::search(buf, pattern, offset)
    }

    /// Search for `marker`, then decode `def` right after it.
    ///
    /// Returns `None` when the marker does not occur at or after `offset`.
    pub fn decode_after<'p>(
        &self,
        buf: &[u8],
        marker: impl Into<Pattern<'p>>,
        def: &StructDefinition,
        offset: usize,
    ) -> Option<DecodeResult> {
        let marker: Pattern<'p> = marker.into();
        let at = search::find(buf, marker.as_bytes(), offset)?;
        Some(self.decode(buf, def, at + marker.len()))
    }
}
