//! notes-sync CLI
//!
//! Splits note backups into per-note files and pushes working-tree files
//! to a git remote in batches.

mod cli;
mod commands;
mod error;
mod interrupt;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::PushArgs;
use error::Result;
use notes_sync::CancellationToken;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let cwd = std::env::current_dir()?;
    match cli.command {
        Some(Commands::Init { force }) => commands::run_init(&cwd, cli.config.as_deref(), force),
        Some(Commands::Split { backup, out }) => commands::run_split(&cwd, &backup, &out),
        Some(Commands::Push {
            dir,
            changed_only,
            batch_size,
            max_attempts,
            retry_delay_ms,
            inter_batch_delay_ms,
            remote,
            branch,
            git,
            json,
        }) => {
            let config = commands::load_config(&cwd, cli.config.as_deref())?;
            let args = PushArgs {
                dir,
                changed_only,
                batch_size,
                max_attempts,
                retry_delay_ms,
                inter_batch_delay_ms,
                remote,
                branch,
                git,
                json,
            };
            let cancel = CancellationToken::new();
            interrupt::cancel_on_interrupt(cancel.clone());
            commands::run_push(&cwd, config, args, cancel)
        }
        Some(Commands::Status {
            remote,
            branch,
            json,
        }) => {
            let config = commands::load_config(&cwd, cli.config.as_deref())?;
            commands::run_status(&cwd, &config, remote, branch, json)
        }
        None => {
            println!("{} Batched note synchronization", "notes-sync".green().bold());
            println!();
            println!("Run {} for available commands.", "notes-sync --help".cyan());
            Ok(())
        }
    }
}
