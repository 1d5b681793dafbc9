//! Batched synchronization of a working tree to a git remote
//!
//! Work items are partitioned into fixed-size batches; each batch is
//! staged, committed and pushed with bounded retries. The first batch that
//! cannot be staged, committed or pushed halts the run, leaving everything
//! before it published and the failed commit local.

pub mod batch;
pub mod cancel;
pub mod config;
pub mod error;
pub mod outcome;
pub mod retry;
pub mod synchronizer;

pub use batch::{Batch, partition};
pub use cancel::CancellationToken;
pub use config::SyncConfig;
pub use error::{Error, Result};
pub use outcome::{BatchRecord, Failure, FailureKind, SyncOutcome};
pub use retry::{Retried, RetryPolicy, Sleeper, ThreadSleeper, with_retry};
pub use synchronizer::BatchSynchronizer;
