//! Local commits that have not reached the remote yet.
//!
//! After a halted run the failed batch's commit stays local; this lists
//! such commits so the operator knows what is still unpublished.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{BranchType, Repository};
use serde::Serialize;

use crate::{Error, Result};

/// Information about a single commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub message: String,

    /// Commit author name
    pub author: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// Commits on `branch` not reachable from `<remote>/<branch>`.
///
/// Most recent first. When the remote-tracking ref does not exist yet,
/// every commit on the branch is pending.
pub fn pending_commits(repo_root: &Path, remote: &str, branch: &str) -> Result<Vec<CommitInfo>> {
    let repo = Repository::open(repo_root)?;

    let local = repo
        .find_branch(branch, BranchType::Local)
        .map_err(|_| Error::BranchNotFound {
            name: branch.to_string(),
        })?;
    let local_tip = local.get().peel_to_commit()?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push(local_tip.id())?;
    revwalk.set_sorting(git2::Sort::TIME)?;

    match repo.find_reference(&format!("refs/remotes/{remote}/{branch}")) {
        Ok(tracking) => revwalk.hide(tracking.peel_to_commit()?.id())?,
        Err(_) => tracing::debug!(%remote, %branch, "No remote-tracking ref; all commits pending"),
    }

    let mut commits = Vec::new();
    for oid_result in revwalk {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .unwrap_or_default();

        commits.push(CommitInfo {
            hash: format!("{:.7}", oid),
            message: commit.summary().unwrap_or("").to_string(),
            author: commit.author().name().unwrap_or("Unknown").to_string(),
            timestamp,
        });
    }

    Ok(commits)
}
