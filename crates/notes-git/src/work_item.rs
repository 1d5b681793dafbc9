//! Work items

use notes_fs::NormalizedPath;
use serde::Serialize;

/// One file that must be staged, identified by its path relative to the
/// working tree root.
///
/// Immutable once enumerated. Separators are normalized so identifiers
/// compare equal regardless of how the path was spelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct WorkItem(NormalizedPath);

impl WorkItem {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<WorkItem> for String {
    fn from(item: WorkItem) -> Self {
        item.0.as_str().to_string()
    }
}

impl From<&str> for WorkItem {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for WorkItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
