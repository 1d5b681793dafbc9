//! What a run did, batch by batch

use serde::Serialize;

/// Which step of a batch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Stage,
    Commit,
    Push,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Stage => "stage",
            Self::Commit => "commit",
            Self::Push => "push",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    /// Transport diagnostic from the last failed call
    pub diagnostic: String,
}

/// Result of one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    /// 1-based batch index
    pub batch_index: usize,
    pub item_count: usize,
    pub committed: bool,
    pub pushed: bool,
    /// Push attempts made; 0 when staging or committing failed
    pub attempts_used: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

impl BatchRecord {
    pub(crate) fn new(batch_index: usize, item_count: usize) -> Self {
        Self {
            batch_index,
            item_count,
            committed: false,
            pushed: false,
            attempts_used: 0,
            failure: None,
        }
    }

    pub(crate) fn fail(&mut self, kind: FailureKind, diagnostic: String) {
        self.failure = Some(Failure { kind, diagnostic });
    }
}

/// Accumulated result of a run, one record per processed batch.
///
/// Batches after a halting batch have no record: they were never staged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub batches: Vec<BatchRecord>,
    /// Batches the partition produced
    pub total_batches: usize,
    /// A batch failed and later batches were not attempted
    pub halted_early: bool,
    /// Index of the batch that caused the halt
    pub halted_at: Option<usize>,
    /// The run stopped because its cancellation token was set
    pub cancelled: bool,
}

impl SyncOutcome {
    pub(crate) fn new(total_batches: usize) -> Self {
        Self {
            total_batches,
            ..Self::default()
        }
    }

    pub(crate) fn halt(&mut self, batch_index: usize) {
        self.halted_early = true;
        self.halted_at = Some(batch_index);
    }

    /// Every batch was pushed.
    pub fn is_complete(&self) -> bool {
        !self.halted_early
            && self.batches.len() == self.total_batches
            && self.batches.iter().all(|b| b.pushed)
    }

    pub fn pushed_batches(&self) -> usize {
        self.batches.iter().filter(|b| b.pushed).count()
    }

    /// Work items known to have reached the remote.
    pub fn pushed_items(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.pushed)
            .map(|b| b.item_count)
            .sum()
    }

    /// The record of the batch that halted the run.
    pub fn halting_record(&self) -> Option<&BatchRecord> {
        let index = self.halted_at?;
        self.batches.iter().find(|b| b.batch_index == index)
    }
}
