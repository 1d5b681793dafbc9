//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// notes-sync - Shard note backups and push them to a git remote in batches
#[derive(Parser, Debug)]
#[command(name = "notes-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (TOML, JSON or YAML). Defaults to ./notes-sync.toml if present
    #[arg(short, long, global = true, env = "NOTES_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a config file with the default settings
    ///
    /// Writes ./notes-sync.toml, or the file given with --config.
    ///
    /// Examples:
    ///   notes-sync init
    ///   notes-sync --config sync.yaml init --force
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Split a backup document into one file per note
    ///
    /// Writes notes/<id>.json, labels.json and a compact bundle.json.
    ///
    /// Examples:
    ///   notes-sync split --backup keep-backup.json --out data
    Split {
        /// Backup document with top-level "notes" and "labels"
        #[arg(short, long)]
        backup: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },

    /// Stage, commit and push files in batches
    ///
    /// Examples:
    ///   notes-sync push media                  # every file under media/
    ///   notes-sync push data --changed-only    # only new or modified files
    ///   notes-sync push media --batch-size 50 --max-attempts 2
    Push {
        /// Directory to synchronize, relative to the working tree
        #[arg(default_value = ".")]
        dir: String,

        /// Only files git reports as new or changed
        #[arg(long)]
        changed_only: bool,

        /// Files per batch
        #[arg(long)]
        batch_size: Option<usize>,

        /// Push attempts per batch
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Pause between push attempts, in milliseconds
        #[arg(long)]
        retry_delay_ms: Option<u64>,

        /// Pause between batches, in milliseconds
        #[arg(long)]
        inter_batch_delay_ms: Option<u64>,

        /// Remote to push to
        #[arg(long)]
        remote: Option<String>,

        /// Branch to push
        #[arg(long)]
        branch: Option<String>,

        /// Path to the git executable
        #[arg(long, env = "NOTES_SYNC_GIT")]
        git: Option<PathBuf>,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List local commits that have not reached the remote
    Status {
        /// Remote to compare against
        #[arg(long)]
        remote: Option<String>,

        /// Branch to compare
        #[arg(long)]
        branch: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
