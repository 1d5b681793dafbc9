//! Partitioning work items into batches

use notes_git::WorkItem;

use crate::{Error, Result};

/// A contiguous, non-empty slice of the enumerated work items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// 1-based position of this batch
    pub index: usize,
    /// Number of batches in the partition
    pub total: usize,
    pub items: &'a [WorkItem],
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split `items` into batches of `batch_size`, preserving order.
///
/// Every batch holds exactly `batch_size` items except possibly the last.
/// Concatenating the batches reproduces `items`. An empty input yields no
/// batches.
pub fn partition(items: &[WorkItem], batch_size: usize) -> Result<Vec<Batch<'_>>> {
    if batch_size == 0 {
        return Err(Error::configuration("batch size must be a positive integer"));
    }

    let total = items.len().div_ceil(batch_size);
    Ok(items
        .chunks(batch_size)
        .enumerate()
        .map(|(i, chunk)| Batch {
            index: i + 1,
            total,
            items: chunk,
        })
        .collect())
}
