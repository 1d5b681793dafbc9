//! Error types for notes-model

/// Result type for notes-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notes-model operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from notes-fs
    #[error(transparent)]
    Fs(#[from] notes_fs::Error),

    /// Malformed backup document
    #[error("Invalid backup document {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of a note or label failed
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
