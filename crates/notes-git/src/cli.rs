//! [`Transport`] backed by the git command-line tool

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde::{Deserialize, Serialize};

use crate::{Transport, TransportResult, WorkItem};

fn default_git_path() -> PathBuf {
    PathBuf::from("git")
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// Where the git executable lives and which remote/branch to publish to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Path to the git executable
    #[serde(default = "default_git_path")]
    pub git_path: PathBuf,

    /// Working tree the commands run in
    pub work_dir: PathBuf,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,
}

impl TransportConfig {
    /// Config for `work_dir` using `git` from `PATH`, `origin` and `main`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_path: default_git_path(),
            work_dir: work_dir.into(),
            remote: default_remote(),
            branch: default_branch(),
        }
    }

    pub fn with_git_path(mut self, git_path: impl Into<PathBuf>) -> Self {
        self.git_path = git_path.into();
        self
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

/// Runs `git add`, `git commit` and `git push` as subprocesses.
#[derive(Debug, Clone)]
pub struct GitCli {
    config: TransportConfig,
}

impl GitCli {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn work_dir(&self) -> &Path {
        &self.config.work_dir
    }

    fn output(&self, args: &[&str]) -> std::io::Result<Output> {
        tracing::debug!(git = %self.config.git_path.display(), ?args, "Running git");
        Command::new(&self.config.git_path)
            .current_dir(&self.config.work_dir)
            .args(args)
            .output()
    }

    /// Run git and fold every outcome into a [`TransportResult`].
    fn run(&self, args: &[&str]) -> TransportResult {
        let output = match self.output(args) {
            Ok(output) => output,
            Err(e) => {
                return TransportResult::Failed(format!(
                    "failed to launch {}: {}",
                    self.config.git_path.display(),
                    e
                ));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            // push reports progress on stderr
            let combined = match (stdout.is_empty(), stderr.is_empty()) {
                (_, true) => stdout,
                (true, false) => stderr,
                (false, false) => format!("{stdout}\n{stderr}"),
            };
            TransportResult::Ok(combined)
        } else {
            let code = output.status.code().unwrap_or(-1);
            let diagnostic = if stderr.is_empty() {
                format!("git {} exited with code {}", args.join(" "), code)
            } else {
                stderr
            };
            TransportResult::Failed(diagnostic)
        }
    }

    /// Whether anything is staged. `Err` carries a diagnostic.
    fn has_staged_changes(&self) -> Result<bool, String> {
        let output = self
            .output(&["diff", "--cached", "--quiet"])
            .map_err(|e| format!("failed to launch {}: {}", self.config.git_path.display(), e))?;

        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(String::from_utf8_lossy(&output.stderr).trim().to_string()),
        }
    }
}

impl Transport for GitCli {
    fn stage(&mut self, items: &[WorkItem]) -> TransportResult {
        if items.is_empty() {
            return TransportResult::Ok(String::new());
        }

        let mut args = vec!["add", "--"];
        args.extend(items.iter().map(WorkItem::as_str));
        self.run(&args)
    }

    fn commit(&mut self, message: &str) -> TransportResult {
        match self.has_staged_changes() {
            Ok(true) => self.run(&["commit", "-m", message]),
            Ok(false) => {
                tracing::debug!("Nothing staged; skipping commit");
                TransportResult::Ok(String::new())
            }
            Err(diagnostic) => TransportResult::Failed(diagnostic),
        }
    }

    fn push(&mut self) -> TransportResult {
        self.run(&["push", &self.config.remote, &self.config.branch])
    }
}
