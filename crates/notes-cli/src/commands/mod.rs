//! Command implementations for the notes-sync CLI

pub mod init;
pub mod push;
pub mod split;
pub mod status;

pub use init::run_init;
pub use push::{PushArgs, run_push};
pub use split::run_split;
pub use status::run_status;

use std::path::Path;

use notes_fs::NormalizedPath;
use notes_sync::SyncConfig;
use notes_sync::config::CONFIG_FILE;

use crate::error::Result;

/// Resolve the sync configuration.
///
/// An explicit path must exist. Without one, `notes-sync.toml` in `cwd` is
/// used when present, otherwise the defaults.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<SyncConfig> {
    let path = match explicit {
        Some(path) => NormalizedPath::new(cwd.join(path)),
        None => {
            let default = NormalizedPath::new(cwd.join(CONFIG_FILE));
            if !default.is_file() {
                tracing::debug!("No {} found; using defaults", CONFIG_FILE);
                return Ok(SyncConfig::default());
            }
            default
        }
    };

    tracing::debug!(path = %path, "Loading config");
    Ok(SyncConfig::load(&path)?)
}
