//! Git repository fixtures.
//!
//! Everything here shells out to the real `git` binary, because that is
//! what the transport under test drives.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git <args>` in `dir`, returning trimmed stdout.
///
/// # Panics
/// Panics if git cannot be launched or exits non-zero.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialises a real git repository with `git2` (no commit, no config).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a repository on branch `main` with one commit (`README.md`)
/// and a local identity so later commits succeed.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Notes")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));

    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
    git(path, &["branch", "-M", "main"]);
}

/// Initialises a bare repository to act as a push target.
///
/// # Panics
/// Panics if `git init --bare` fails.
pub fn bare_remote(path: &Path) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("bare_remote: failed to create {}: {e}", path.display()));
    git(path, &["init", "--bare"]);
}

/// Number of commits on `branch` in the repository at `repo`.
pub fn commit_count(repo: &Path, branch: &str) -> usize {
    git(repo, &["rev-list", "--count", branch])
        .parse()
        .unwrap_or_else(|e| panic!("commit_count: unexpected rev-list output: {e}"))
}

/// Commit subjects on `branch`, oldest first.
pub fn commit_subjects(repo: &Path, branch: &str) -> Vec<String> {
    git(repo, &["log", "--reverse", "--format=%s", branch])
        .lines()
        .map(str::to_string)
        .collect()
}
