//! Error types for notes-git

use std::path::PathBuf;

/// Result type for notes-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notes-git operations.
///
/// Transport calls never produce these; they report failure through
/// [`crate::TransportResult`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] notes_fs::Error),

    #[error("Root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },
}
