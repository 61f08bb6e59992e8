//! Out-of-line execution for the codec engines.
//!
//! A request moves its buffer into a worker thread; the response moves it
//! back. Between the two the caller holds no reference to the buffer, so no
//! locking is needed around the bytes themselves.
//!
//! Workers are:
//! - CPU-bound
//! - Stateless between requests
//! - Independent (disjoint buffers, no shared mutable state besides counters)

pub mod types;
pub mod pool;

pub use types::{Outcome, Request, Response, WorkerConfig};
pub use pool::{CodecWorkerPool, Pending};
