//! Transport boundary between the synchronizer and the remote repository

use crate::WorkItem;

/// Result of a single transport call.
///
/// Failures are values, never errors: callers decide whether a failure
/// continues, retries or halts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResult {
    /// The call succeeded, with whatever the tool printed
    Ok(String),
    /// The call failed, with a diagnostic for the operator
    Failed(String),
}

impl TransportResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Output of a successful call.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Ok(out) => Some(out),
            Self::Failed(_) => None,
        }
    }

    /// Diagnostic of a failed call.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(diag) => Some(diag),
        }
    }
}

/// The three remote-repository primitives.
///
/// All calls block until the underlying operation finishes. Implementations
/// must convert every underlying fault into [`TransportResult::Failed`].
pub trait Transport {
    /// Mark `items` for inclusion in the next commit. Staging an item that
    /// is already staged is not an error.
    fn stage(&mut self, items: &[WorkItem]) -> TransportResult;

    /// Create a local checkpoint of everything staged. With nothing staged
    /// this succeeds without creating a checkpoint.
    fn commit(&mut self, message: &str) -> TransportResult;

    /// Publish local checkpoints to the remote.
    fn push(&mut self) -> TransportResult;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn stage(&mut self, items: &[WorkItem]) -> TransportResult {
        (**self).stage(items)
    }

    fn commit(&mut self, message: &str) -> TransportResult {
        (**self).commit(message)
    }

    fn push(&mut self) -> TransportResult {
        (**self).push()
    }
}
