//! telemetry/snapshot.rs
//! Immutable view of the counters at a point in time.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;
use crate::types::CodecError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub counters: CodecCounters,
    pub elapsed: Duration,
    /// (bytes read + bytes written) per second of wall time.
    pub throughput_bytes_per_sec: f64,
}

impl CodecSnapshot {
    pub fn from(counters: &CodecCounters, started: Instant) -> Self {
        let elapsed = started.elapsed();
        let bytes = counters.bytes_read + counters.bytes_written;
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            bytes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            elapsed,
            throughput_bytes_per_sec: throughput,
        }
    }

    pub fn error_rate(&self) -> f64 {
        let calls = self.counters.decode_calls + self.counters.encode_calls;
        if calls == 0 {
            0.0
        } else {
            self.counters.data_errors as f64 / calls as f64
        }
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string(self).map_err(|e| CodecError::Telemetry(e.to_string()))
    }
}
