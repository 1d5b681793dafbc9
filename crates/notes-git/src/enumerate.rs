//! Work-item enumeration
//!
//! Produces the ordered list of files a run must stage, either by walking
//! a directory or by asking git which files are new or changed.

use std::fs;

use git2::{Repository, Status, StatusOptions};
use notes_fs::NormalizedPath;

use crate::{Error, Result, WorkItem};

/// Which files to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumerateMode {
    /// Every file under the subdirectory
    #[default]
    All,
    /// Only files git reports as new, modified, deleted or renamed
    Changed,
}

/// Lists work items under `subdir` of a working tree.
///
/// Items are relative to `repo_root`, sorted and free of duplicates, so
/// the same tree state always yields the same sequence.
#[derive(Debug, Clone)]
pub struct Enumerator {
    repo_root: NormalizedPath,
    subdir: NormalizedPath,
    mode: EnumerateMode,
}

impl Enumerator {
    pub fn new(
        repo_root: impl Into<NormalizedPath>,
        subdir: impl Into<NormalizedPath>,
        mode: EnumerateMode,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            subdir: subdir.into(),
            mode,
        }
    }

    pub fn enumerate(&self) -> Result<Vec<WorkItem>> {
        if !self.repo_root.is_dir() {
            return Err(Error::RootNotFound {
                path: self.repo_root.to_native(),
            });
        }

        let mut items = match self.mode {
            EnumerateMode::All => self.walk()?,
            EnumerateMode::Changed => self.changed()?,
        };
        items.sort();
        items.dedup();

        tracing::debug!(
            root = %self.repo_root,
            subdir = %self.subdir,
            mode = ?self.mode,
            count = items.len(),
            "Enumerated work items"
        );
        Ok(items)
    }

    fn walk(&self) -> Result<Vec<WorkItem>> {
        let start = self.repo_root.join(self.subdir.as_str());
        if !start.is_dir() {
            return Err(Error::RootNotFound {
                path: start.to_native(),
            });
        }

        let mut items = Vec::new();
        let mut pending = vec![self.subdir.clone()];

        while let Some(rel_dir) = pending.pop() {
            let abs_dir = self.repo_root.join(rel_dir.as_str()).to_native();
            let entries = fs::read_dir(&abs_dir).map_err(|e| notes_fs::Error::io(&abs_dir, e))?;

            for entry in entries {
                let entry = entry.map_err(|e| notes_fs::Error::io(&abs_dir, e))?;
                let name = entry.file_name().to_string_lossy().to_string();
                let file_type = entry
                    .file_type()
                    .map_err(|e| notes_fs::Error::io(entry.path(), e))?;

                if file_type.is_dir() {
                    if name != ".git" {
                        pending.push(rel_dir.join(&name));
                    }
                } else if file_type.is_file() {
                    items.push(WorkItem::new(rel_dir.join(&name)));
                }
            }
        }

        Ok(items)
    }

    fn changed(&self) -> Result<Vec<WorkItem>> {
        let repo = Repository::open(self.repo_root.to_native())?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);
        if self.subdir.as_str() != "." {
            opts.pathspec(self.subdir.as_str());
        }

        let statuses = repo.statuses(Some(&mut opts))?;
        let items = statuses
            .iter()
            .filter(|entry| is_stageable(entry.status()))
            .filter_map(|entry| entry.path().map(NormalizedPath::new))
            .filter(|path| path.relative_to(&self.subdir).is_some())
            .map(WorkItem::new)
            .collect();

        Ok(items)
    }
}

/// Whether `git add -- <path>` accepts the entry.
///
/// A removal already staged with `git rm` is gone from both the index and
/// the working tree, so it is left to the next commit instead.
fn is_stageable(status: Status) -> bool {
    let worktree = Status::WT_NEW
        | Status::WT_MODIFIED
        | Status::WT_DELETED
        | Status::WT_RENAMED
        | Status::WT_TYPECHANGE;
    let index = Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE;

    status.intersects(worktree) || status.intersects(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_removal_is_not_stageable() {
        assert!(!is_stageable(Status::INDEX_DELETED));
    }

    #[test]
    fn test_removed_from_index_but_on_disk_is_stageable() {
        assert!(is_stageable(Status::INDEX_DELETED | Status::WT_NEW));
    }

    #[test]
    fn test_worktree_and_index_changes_are_stageable() {
        assert!(is_stageable(Status::WT_DELETED));
        assert!(is_stageable(Status::INDEX_NEW));
        assert!(is_stageable(Status::INDEX_MODIFIED | Status::WT_MODIFIED));
        assert!(!is_stageable(Status::CURRENT));
        assert!(!is_stageable(Status::IGNORED));
    }
}
