//! `status`: local commits not yet on the remote

use std::path::Path;

use colored::Colorize;
use notes_git::pending_commits;
use notes_sync::SyncConfig;

use crate::error::Result;

pub fn run_status(
    cwd: &Path,
    config: &SyncConfig,
    remote: Option<String>,
    branch: Option<String>,
    json: bool,
) -> Result<()> {
    let remote = remote.unwrap_or_else(|| config.remote_name.clone());
    let branch = branch.unwrap_or_else(|| config.branch_name.clone());

    let pending = pending_commits(cwd, &remote, &branch)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pending)?);
        return Ok(());
    }

    if pending.is_empty() {
        println!(
            "{} {} is up to date with {}/{}.",
            "OK".green().bold(),
            branch.cyan(),
            remote,
            branch
        );
        return Ok(());
    }

    println!(
        "{} {} commit(s) on {} not on {}/{}:",
        "PENDING".yellow().bold(),
        pending.len(),
        branch.cyan(),
        remote,
        branch
    );
    for commit in &pending {
        println!(
            "   {} {} {} ({})",
            commit.hash.yellow(),
            commit.message,
            commit.author.dimmed(),
            commit.timestamp.format("%Y-%m-%d %H:%M")
        );
    }
    println!();
    println!("Run {} to retry.", "notes-sync push".cyan());

    Ok(())
}
