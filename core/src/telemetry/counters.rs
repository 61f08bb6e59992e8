//! telemetry/counters.rs
//! Mutable counters collected while decoding / encoding / searching.

use std::ops::AddAssign;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::decode::DecodeResult;
use crate::encode::EncodeProgress;
use crate::types::CodecError;

#[derive(Default, Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct CodecCounters {
    pub decode_calls: u64,
    pub encode_calls: u64,
    pub search_calls: u64,
    pub fields_decoded: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub search_hits: u64,
    /// Decode/encode calls that ended with `error = true`.
    pub data_errors: u64,
    /// Calls rejected with a `CodecError`.
    pub schema_errors: u64,
}

impl CodecCounters {
    pub fn add_decode(&mut self, result: &DecodeResult, offset: usize) {
        self.decode_calls += 1;
        self.fields_decoded += result.data.len() as u64;
        self.bytes_read += result.consumed(offset) as u64;
        if result.error {
            self.data_errors += 1;
        }
    }

    pub fn add_encode(&mut self, progress: &EncodeProgress, offset: usize) {
        self.encode_calls += 1;
        self.bytes_written += progress.end.saturating_sub(offset) as u64;
        if progress.error {
            self.data_errors += 1;
        }
    }

    pub fn add_search(&mut self, found: Option<usize>) {
        self.search_calls += 1;
        if found.is_some() {
            self.search_hits += 1;
        }
    }

    pub fn add_schema_error(&mut self) {
        self.schema_errors += 1;
    }

    pub fn total_calls(&self) -> u64 {
        self.decode_calls + self.encode_calls + self.search_calls
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.decode_calls += other.decode_calls;
        self.encode_calls += other.encode_calls;
        self.search_calls += other.search_calls;
        self.fields_decoded += other.fields_decoded;
        self.bytes_read += other.bytes_read;
        self.bytes_written += other.bytes_written;
        self.search_hits += other.search_hits;
        self.data_errors += other.data_errors;
        self.schema_errors += other.schema_errors;
    }

    /// Compact binary form for persisting counters between runs.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        bincode::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| CodecError::Telemetry(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let (counters, _) = bincode::decode_from_slice(bytes, bincode::config::standard())
            .map_err(|e| CodecError::Telemetry(e.to_string()))?;
        Ok(counters)
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
