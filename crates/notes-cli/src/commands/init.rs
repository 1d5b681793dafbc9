//! `init`: write a config file with the default settings

use std::path::Path;

use colored::Colorize;
use notes_fs::NormalizedPath;
use notes_sync::SyncConfig;
use notes_sync::config::CONFIG_FILE;

use crate::error::Result;

pub fn run_init(cwd: &Path, explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = NormalizedPath::new(cwd.join(explicit.unwrap_or(Path::new(CONFIG_FILE))));
    let config = SyncConfig::default();

    config.save(&path, force)?;

    println!("{} Wrote {}", "OK".green().bold(), path.as_str().cyan());
    println!(
        "   batch_size = {}, max_push_attempts = {}, remote {}/{}",
        config.batch_size, config.max_push_attempts, config.remote_name, config.branch_name
    );
    Ok(())
}
