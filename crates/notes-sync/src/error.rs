//! Error types for notes-sync

/// Result type for notes-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a run before any batch is processed.
///
/// Transport failures during a run are not errors; they are recorded in
/// the [`crate::SyncOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid batch size, attempt budget or similar
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem error from notes-fs
    #[error(transparent)]
    Fs(#[from] notes_fs::Error),

    /// Enumeration error from notes-git
    #[error(transparent)]
    Git(notes_git::Error),
}

impl From<notes_git::Error> for Error {
    /// A missing root directory is a configuration problem, not a git one.
    fn from(error: notes_git::Error) -> Self {
        match error {
            notes_git::Error::RootNotFound { path } => {
                Self::configuration(format!("root directory not found: {}", path.display()))
            }
            other => Self::Git(other),
        }
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_root_maps_to_configuration_error() {
        let err = Error::from(notes_git::Error::RootNotFound {
            path: PathBuf::from("/no/such/dir"),
        });
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn test_other_git_errors_are_wrapped() {
        let err = Error::from(notes_git::Error::BranchNotFound {
            name: "main".into(),
        });
        assert!(matches!(err, Error::Git(_)));
    }
}
