//! `push`: batched stage/commit/push of a directory

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use notes_git::{EnumerateMode, Enumerator, GitCli};
use notes_sync::{BatchSynchronizer, CancellationToken, SyncConfig, SyncOutcome};

use crate::error::{CliError, Result};

/// Command-line overrides for a push run.
#[derive(Debug, Clone, Default)]
pub struct PushArgs {
    pub dir: String,
    pub changed_only: bool,
    pub batch_size: Option<usize>,
    pub max_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub inter_batch_delay_ms: Option<u64>,
    pub remote: Option<String>,
    pub branch: Option<String>,
    pub git: Option<PathBuf>,
    pub json: bool,
}

impl PushArgs {
    fn apply(&self, config: &mut SyncConfig) {
        if let Some(size) = self.batch_size {
            config.batch_size = size;
        }
        if let Some(attempts) = self.max_attempts {
            config.max_push_attempts = attempts;
        }
        if let Some(ms) = self.retry_delay_ms {
            config.retry_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.inter_batch_delay_ms {
            config.inter_batch_delay = Duration::from_millis(ms);
        }
        if let Some(remote) = &self.remote {
            config.remote_name = remote.clone();
        }
        if let Some(branch) = &self.branch {
            config.branch_name = branch.clone();
        }
    }
}

/// Run the push; `cancel` stops it between steps (wired to Ctrl-C).
pub fn run_push(
    cwd: &Path,
    mut config: SyncConfig,
    args: PushArgs,
    cancel: CancellationToken,
) -> Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let mode = if args.changed_only {
        EnumerateMode::Changed
    } else {
        EnumerateMode::All
    };
    let items = Enumerator::new(cwd, args.dir.as_str(), mode)
        .enumerate()
        .map_err(notes_sync::Error::from)?;

    if !args.json {
        println!(
            "{} Found {} files in {} ({} batches of up to {})",
            "=>".blue().bold(),
            items.len(),
            args.dir.cyan(),
            items.len().div_ceil(config.batch_size),
            config.batch_size
        );
    }

    let mut transport_config = config.transport_config(cwd);
    if let Some(git) = &args.git {
        transport_config = transport_config.with_git_path(git);
    }

    let outcome = BatchSynchronizer::new(GitCli::new(transport_config), config)
        .with_cancellation(cancel)
        .run(&items)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    match outcome.halted_at {
        Some(index) => Err(CliError::user(format!(
            "halted at batch {}; {} of {} batches pushed",
            index,
            outcome.pushed_batches(),
            outcome.total_batches
        ))),
        None if outcome.cancelled => Err(CliError::user(format!(
            "cancelled; {} of {} batches pushed",
            outcome.pushed_batches(),
            outcome.total_batches
        ))),
        None => Ok(()),
    }
}

fn print_outcome(outcome: &SyncOutcome) {
    for record in &outcome.batches {
        match &record.failure {
            None => println!(
                "   {} batch {}/{} ({} files, {} push attempt{})",
                "OK".green().bold(),
                record.batch_index,
                outcome.total_batches,
                record.item_count,
                record.attempts_used,
                if record.attempts_used == 1 { "" } else { "s" }
            ),
            Some(failure) => println!(
                "   {} batch {}/{} {} failed: {}",
                "FAILED".red().bold(),
                record.batch_index,
                outcome.total_batches,
                failure.kind,
                failure.diagnostic
            ),
        }
    }

    if outcome.halted_early {
        if outcome.halting_record().is_some_and(|r| r.committed) {
            println!();
            println!(
                "The failed batch is committed locally. Run {} to see unpublished commits.",
                "notes-sync status".cyan()
            );
        }
    } else if outcome.cancelled {
        println!("{} Cancelled.", "!".yellow());
    } else {
        println!(
            "{} Pushed {} files in {} batches.",
            "OK".green().bold(),
            outcome.pushed_items(),
            outcome.pushed_batches()
        );
    }
}
