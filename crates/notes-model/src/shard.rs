//! Sharded per-note layout
//!
//! ```text
//! <out>/
//!   notes/<id>.json   one pretty-printed file per note
//!   labels.json       pretty-printed label list
//!   bundle.json       the whole document, compact
//! ```

use notes_fs::{NormalizedPath, io, validate_identifier};

use crate::{Backup, Result};

/// Directory holding one file per note.
pub const NOTES_DIR: &str = "notes";
/// Label list file name.
pub const LABELS_FILE: &str = "labels.json";
/// Compact full-document file name.
pub const BUNDLE_FILE: &str = "bundle.json";

const PROGRESS_EVERY: usize = 500;

/// Summary of a shard write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardReport {
    /// Note files written
    pub notes_written: usize,
    /// Notes without an id
    pub skipped_missing_id: usize,
    /// Notes whose id cannot be used as a file name
    pub skipped_invalid_id: Vec<String>,
    pub labels_written: usize,
    /// Every file written, relative to the output directory
    pub files: Vec<NormalizedPath>,
}

/// Writes a [`Backup`] out as the sharded layout.
#[derive(Debug, Clone)]
pub struct ShardWriter {
    out_dir: NormalizedPath,
}

impl ShardWriter {
    pub fn new(out_dir: impl Into<NormalizedPath>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &NormalizedPath {
        &self.out_dir
    }

    /// Write every shard file. Existing files are overwritten.
    pub fn write(&self, backup: &Backup) -> Result<ShardReport> {
        let mut report = ShardReport::default();

        let labels_rel = NormalizedPath::new(LABELS_FILE);
        let labels_json = serde_json::to_string_pretty(&backup.labels)?;
        io::write_text(&self.out_dir.join(labels_rel.as_str()), &labels_json)?;
        report.labels_written = backup.labels.len();
        report.files.push(labels_rel);

        for (i, note) in backup.notes.iter().enumerate() {
            let Some(id) = note.id.as_deref() else {
                report.skipped_missing_id += 1;
                continue;
            };
            if let Err(e) = validate_identifier(id) {
                tracing::warn!(error = %e, "Skipping note with unusable id");
                report.skipped_invalid_id.push(id.to_string());
                continue;
            }

            let rel = NormalizedPath::new(NOTES_DIR).join(&format!("{id}.json"));
            let content = serde_json::to_string_pretty(note)?;
            io::write_text(&self.out_dir.join(rel.as_str()), &content)?;
            report.notes_written += 1;
            report.files.push(rel);

            if (i + 1) % PROGRESS_EVERY == 0 {
                tracing::info!(
                    processed = i + 1,
                    total = backup.notes.len(),
                    "Writing note shards"
                );
            }
        }

        let bundle_rel = NormalizedPath::new(BUNDLE_FILE);
        io::write_text(
            &self.out_dir.join(bundle_rel.as_str()),
            &backup.to_compact_json()?,
        )?;
        report.files.push(bundle_rel);

        tracing::info!(
            notes = report.notes_written,
            labels = report.labels_written,
            skipped = report.skipped_missing_id + report.skipped_invalid_id.len(),
            out = %self.out_dir,
            "Wrote sharded layout"
        );
        Ok(report)
    }
}
