//! The batch loop: stage, commit, push with retry, halt on failure

use notes_git::{Transport, TransportResult, WorkItem};

use crate::batch::{Batch, partition};
use crate::outcome::{BatchRecord, FailureKind, SyncOutcome};
use crate::retry::{Sleeper, ThreadSleeper};
use crate::{CancellationToken, Result, SyncConfig};

/// Drives a [`Transport`] through every batch of a run.
///
/// Single-threaded: one stage/commit/push sequence at a time against one
/// working tree. Stage and commit failures halt immediately; push failures
/// are retried under the configured policy and halt once it is exhausted.
pub struct BatchSynchronizer<T, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    config: SyncConfig,
    cancel: Option<CancellationToken>,
}

impl<T: Transport> BatchSynchronizer<T, ThreadSleeper> {
    /// Synchronizer that pauses with real thread sleeps.
    pub fn new(transport: T, config: SyncConfig) -> Self {
        Self::with_sleeper(transport, ThreadSleeper, config)
    }
}

impl<T: Transport, S: Sleeper> BatchSynchronizer<T, S> {
    pub fn with_sleeper(transport: T, sleeper: S, config: SyncConfig) -> Self {
        Self {
            transport,
            sleeper,
            config,
            cancel: None,
        }
    }

    /// Stop at the next batch boundary or pause once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Synchronize `items` in batches.
    ///
    /// Fails only on invalid configuration, before any transport call.
    /// Everything that happens afterwards is reported in the returned
    /// [`SyncOutcome`].
    pub fn run(&mut self, items: &[WorkItem]) -> Result<SyncOutcome> {
        self.config.validate()?;
        let batches = partition(items, self.config.batch_size)?;
        let mut outcome = SyncOutcome::new(batches.len());

        if batches.is_empty() {
            tracing::info!("No work items; nothing to synchronize");
            return Ok(outcome);
        }

        tracing::info!(
            items = items.len(),
            batches = batches.len(),
            batch_size = self.config.batch_size,
            "Starting synchronization"
        );

        for batch in &batches {
            if self.is_cancelled() {
                tracing::info!(next_batch = batch.index, "Cancelled before batch");
                outcome.cancelled = true;
                break;
            }

            let record = self.sync_batch(batch);
            let pushed = record.pushed;
            outcome.batches.push(record);

            if !pushed {
                outcome.halt(batch.index);
                outcome.cancelled = self.is_cancelled();
                tracing::error!(
                    batch = batch.index,
                    total = batch.total,
                    "Halting: later batches will not be attempted"
                );
                break;
            }

            if batch.index < batch.total && !self.config.inter_batch_delay.is_zero() {
                if self.is_cancelled() {
                    tracing::info!(next_batch = batch.index + 1, "Cancelled between batches");
                    outcome.cancelled = true;
                    break;
                }
                self.sleeper.sleep(self.config.inter_batch_delay);
            }
        }

        tracing::info!(
            pushed_batches = outcome.pushed_batches(),
            total = outcome.total_batches,
            halted = outcome.halted_early,
            "Synchronization finished"
        );
        Ok(outcome)
    }

    fn sync_batch(&mut self, batch: &Batch<'_>) -> BatchRecord {
        let mut record = BatchRecord::new(batch.index, batch.len());
        tracing::info!(
            batch = batch.index,
            total = batch.total,
            items = batch.len(),
            "Processing batch"
        );

        if let TransportResult::Failed(diagnostic) = self.transport.stage(batch.items) {
            tracing::error!(batch = batch.index, %diagnostic, "Stage failed");
            record.fail(FailureKind::Stage, diagnostic);
            return record;
        }

        let message = self.config.commit_message(batch.index, batch.total);
        if let TransportResult::Failed(diagnostic) = self.transport.commit(&message) {
            tracing::error!(batch = batch.index, %diagnostic, "Commit failed");
            record.fail(FailureKind::Commit, diagnostic);
            return record;
        }
        record.committed = true;

        let policy = self.config.retry_policy();
        let transport = &mut self.transport;
        let retried = policy.run(
            |attempt| match transport.push() {
                TransportResult::Ok(output) => Ok(output),
                TransportResult::Failed(diagnostic) => {
                    tracing::warn!(
                        batch = batch.index,
                        attempt,
                        max_attempts = policy.max_attempts,
                        %diagnostic,
                        "Push failed"
                    );
                    Err(diagnostic)
                }
            },
            &self.sleeper,
            self.cancel.as_ref(),
        );

        record.attempts_used = retried.attempts;
        match retried.result {
            Ok(_) => {
                record.pushed = true;
                tracing::info!(batch = batch.index, attempts = retried.attempts, "Batch pushed");
            }
            Err(diagnostic) => record.fail(FailureKind::Push, diagnostic),
        }
        record
    }
}
