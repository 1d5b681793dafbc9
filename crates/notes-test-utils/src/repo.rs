//! [`SyncFixture`]: a working tree with an `origin` bare remote.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::git::{bare_remote, git, real_git_repo_with_commit};

/// A temporary working tree on `main`, already pushed to a bare `origin`.
///
/// ```rust,no_run
/// use notes_test_utils::SyncFixture;
///
/// let fixture = SyncFixture::new();
/// fixture.write_files("data/notes", 5);
/// ```
pub struct SyncFixture {
    temp_dir: TempDir,
    work: PathBuf,
    remote: PathBuf,
}

impl Default for SyncFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncFixture {
    /// # Panics
    /// Panics if the temporary directory or any git setup step fails.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap_or_else(|e| panic!("SyncFixture: tempdir: {e}"));
        let work = temp_dir.path().join("work");
        let remote = temp_dir.path().join("remote.git");

        fs::create_dir_all(&work).unwrap_or_else(|e| panic!("SyncFixture: mkdir work: {e}"));
        real_git_repo_with_commit(&work);
        bare_remote(&remote);

        let remote_url = remote.to_string_lossy().to_string();
        git(&work, &["remote", "add", "origin", &remote_url]);
        git(&work, &["push", "origin", "main"]);

        Self {
            temp_dir,
            work,
            remote,
        }
    }

    /// Root of the temporary directory holding both repositories.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The working tree.
    pub fn work(&self) -> &Path {
        &self.work
    }

    /// The bare remote.
    pub fn remote(&self) -> &Path {
        &self.remote
    }

    /// Write `count` files named `item-NNN.json` under `subdir` of the
    /// working tree.
    pub fn write_files(&self, subdir: &str, count: usize) -> Vec<String> {
        let dir = self.work.join(subdir);
        fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("write_files: mkdir: {e}"));

        (0..count)
            .map(|i| {
                let name = format!("item-{i:03}.json");
                fs::write(dir.join(&name), format!("{{\"n\": {i}}}"))
                    .unwrap_or_else(|e| panic!("write_files: {name}: {e}"));
                format!("{subdir}/{name}")
            })
            .collect()
    }

    /// Commits on `main` in the remote.
    pub fn remote_commit_count(&self) -> usize {
        crate::git::commit_count(&self.remote, "main")
    }

    /// Commits on `main` in the working tree.
    pub fn local_commit_count(&self) -> usize {
        crate::git::commit_count(&self.work, "main")
    }
}
