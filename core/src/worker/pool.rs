use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam::channel::{bounded, Receiver, Sender};
use tracing::{debug, warn};

use crate::codec::StructCodec;
use crate::decode::DecodeResult;
use crate::definition::StructDefinition;
use crate::encode::EncodeResult;
use crate::search::Pattern;
use crate::telemetry::{CodecCounters, CodecSnapshot};
use crate::types::CodecError;
use crate::value::Record;
use crate::worker::types::{Job, Outcome, Request, Response, WorkerConfig};

/// Fixed set of worker threads sharing one bounded request queue.
pub struct CodecWorkerPool {
    jobs: Option<Sender<Job>>,
    handles: Vec<JoinHandle<()>>,
    counters: Arc<Mutex<CodecCounters>>,
    started: Instant,
}

/// Reply slot for one submitted request.
pub struct Pending {
    reply: Receiver<Response>,
}

impl Pending {
    /// Block until the worker hands the buffer back.
    pub fn wait(self) -> Result<Response, CodecError> {
        self.reply.recv().map_err(|_| {
            warn!("[WORKER] reply channel closed before a response arrived");
            CodecError::Transport("worker dropped the request".into())
        })
    }
}

impl CodecWorkerPool {
    pub fn new(config: WorkerConfig) -> Result<Self, CodecError> {
        let workers = config.workers.max(1);
        let (job_tx, job_rx) = bounded::<Job>(config.queue_depth.max(1));
        let counters = Arc::new(Mutex::new(CodecCounters::default()));
        let codec = StructCodec::new(config.codec);

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let rx = job_rx.clone();
            let counters = Arc::clone(&counters);
            let handle = std::thread::Builder::new()
                .name(format!("bytefields-worker-{id}"))
                .spawn(move || run_worker(id, rx, codec, counters))
                .map_err(|e| CodecError::Transport(format!("failed to spawn worker {id}: {e}")))?;
            handles.push(handle);
        }
        drop(job_rx);

        debug!(workers, "[WORKER] pool started");
        Ok(Self {
            jobs: Some(job_tx),
            handles,
            counters,
            started: Instant::now(),
        })
    }

    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }

    /// Hand `request` (and its buffer) to the pool.
    pub fn submit(&self, request: Request) -> Result<Pending, CodecError> {
        let jobs = self
            .jobs
            .as_ref()
            .ok_or_else(|| CodecError::Transport("worker pool is shut down".into()))?;

        let (reply, rx) = bounded(1);
        jobs.send(Job { request, reply }).map_err(|_| {
            warn!("[WORKER] request queue closed");
            CodecError::Transport("worker pool is shut down".into())
        })?;
        Ok(Pending { reply: rx })
    }

    /// Submit and wait.
    pub fn call(&self, request: Request) -> Result<Response, CodecError> {
        self.submit(request)?.wait()
    }

    /// Decode out of line. The buffer is returned alongside the result.
    pub fn decode(
        &self,
        buffer: Vec<u8>,
        definition: Arc<StructDefinition>,
        offset: usize,
    ) -> Result<(Vec<u8>, DecodeResult), CodecError> {
        let response = self.call(Request::Decode { buffer, definition, offset })?;
        match response.outcome? {
            Outcome::Decoded(result) => Ok((response.buffer, result)),
            other => Err(unexpected("decode", &other)),
        }
    }

    /// Encode out of line. On a schema error the buffer is dropped with the
    /// error; use [`call`](Self::call) to keep it in that case.
    pub fn encode(
        &self,
        buffer: Vec<u8>,
        definition: Arc<StructDefinition>,
        record: Record,
        offset: usize,
    ) -> Result<EncodeResult, CodecError> {
        let response = self.call(Request::Encode { buffer, definition, record, offset })?;
        match response.outcome? {
            Outcome::Encoded(progress) => Ok(EncodeResult {
                buffer: response.buffer,
                end: progress.end,
                error: progress.error,
            }),
            other => Err(unexpected("encode", &other)),
        }
    }

    /// Search out of line. The buffer is returned alongside the index.
    pub fn search<'p>(
        &self,
        buffer: Vec<u8>,
        pattern: impl Into<Pattern<'p>>,
        offset: usize,
    ) -> Result<(Vec<u8>, Option<usize>), CodecError> {
        let response = self.call(Request::Search {
            buffer,
            pattern: Into::<Pattern<'p>>::into(pattern).into_owned(),
            offset,
        })?;
        match response.outcome? {
            Outcome::Found(index) => Ok((response.buffer, index)),
            other => Err(unexpected("search", &other)),
        }
    }

    /// Totals across all workers so far.
    pub fn snapshot(&self) -> CodecSnapshot {
        let counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        CodecSnapshot::from(&counters, self.started)
    }

    /// Close the queue and wait for every worker to drain it.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        // Dropping the sender ends every worker loop once the queue is empty.
        self.jobs.take();
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!("[WORKER] worker thread panicked");
            }
        }
    }
}

impl Drop for CodecWorkerPool {
    fn drop(&mut self) {
        self.close();
    }
}

fn unexpected(op: &str, outcome: &Outcome) -> CodecError {
    CodecError::Transport(format!("{op} request answered with {outcome:?}"))
}

fn run_worker(
    id: usize,
    rx: Receiver<Job>,
    codec: StructCodec,
    totals: Arc<Mutex<CodecCounters>>,
) {
    while let Ok(Job { request, reply }) = rx.recv() {
        let mut counters = CodecCounters::default();
        let kind = request.kind();
        let response = process(&codec, request, &mut counters);

        totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(&counters);
        if reply.send(response).is_err() {
            // Caller gave up on the reply; the buffer is dropped here.
            debug!(worker = id, kind, "[WORKER] reply receiver gone");
        }
    }
    debug!(worker = id, "[WORKER] queue closed, exiting");
}

/// Run one request on the current thread.
pub fn process(codec: &StructCodec, request: Request, counters: &mut CodecCounters) -> Response {
    match request {
        Request::Decode { buffer, definition, offset } => {
            let result = codec.decode(&buffer, &definition, offset);
            counters.add_decode(&result, offset);
            Response {
                buffer,
                outcome: Ok(Outcome::Decoded(result)),
            }
        }
        Request::Encode { mut buffer, definition, record, offset } => {
            let outcome = match codec.encode_into(&mut buffer, &definition, &record, offset) {
                Ok(progress) => {
                    counters.add_encode(&progress, offset);
                    Ok(Outcome::Encoded(progress))
                }
                Err(e) => {
                    counters.add_schema_error();
                    Err(e)
                }
            };
            Response { buffer, outcome }
        }
        Request::Search { buffer, pattern, offset } => {
            let found = codec.search(&buffer, &pattern, offset);
            counters.add_search(found);
            Response {
                buffer,
                outcome: Ok(Outcome::Found(found)),
            }
        }
    }
}
