use std::sync::Arc;

use crossbeam::channel::Sender;

use crate::config::CodecConfig;
use crate::decode::DecodeResult;
use crate::definition::StructDefinition;
use crate::encode::EncodeProgress;
use crate::types::CodecError;
use crate::value::Record;

/// Work handed to a pool. Every variant owns its buffer.
#[derive(Debug)]
pub enum Request {
    Decode {
        buffer: Vec<u8>,
        definition: Arc<StructDefinition>,
        offset: usize,
    },
    Encode {
        buffer: Vec<u8>,
        definition: Arc<StructDefinition>,
        record: Record,
        offset: usize,
    },
    Search {
        buffer: Vec<u8>,
        pattern: Vec<u8>,
        offset: usize,
    },
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Decode { .. } => "decode",
            Request::Encode { .. } => "encode",
            Request::Search { .. } => "search",
        }
    }
}

/// Engine result carried back in a [`Response`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Decoded(DecodeResult),
    Encoded(EncodeProgress),
    Found(Option<usize>),
}

/// Reply to one request: the buffer comes back whatever the outcome.
#[derive(Debug)]
pub struct Response {
    pub buffer: Vec<u8>,
    pub outcome: Result<Outcome, CodecError>,
}

/// Pool sizing and the codec configuration every worker runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    pub workers: usize,
    /// Requests that may wait in the queue before `submit` blocks.
    pub queue_depth: usize,
    pub codec: CodecConfig,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        // leave one core to the caller
        let workers = num_cpus::get().saturating_sub(1).max(1);
        Self {
            workers,
            queue_depth: workers * 4,
            codec: CodecConfig::default(),
        }
    }
}

impl WorkerConfig {
    pub fn single_threaded() -> Self {
        Self {
            workers: 1,
            queue_depth: 1,
            codec: CodecConfig::default(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self.queue_depth = self.queue_depth.max(self.workers);
        self
    }

    pub fn with_codec(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }
}

pub(crate) struct Job {
    pub request: Request,
    pub reply: Sender<Response>,
}
