//! The aggregated backup document

use serde::{Deserialize, Serialize};

use notes_fs::{NormalizedPath, io};

use crate::{Error, Label, Note, Result};

/// All notes and labels in a single document.
///
/// Serialized with exactly two top-level keys, `notes` and `labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default)]
    pub notes: Vec<Note>,

    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Backup {
    pub fn new(notes: Vec<Note>, labels: Vec<Label>) -> Self {
        Self { notes, labels }
    }

    /// Read a backup document from disk.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_string(),
            source,
        })
    }

    /// Write the document with two-space indentation.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        io::write_text(path, &content)?;
        Ok(())
    }

    /// Compact single-line form used for the bundle file.
    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
