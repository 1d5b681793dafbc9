//! Synchronization settings

use std::path::PathBuf;
use std::time::Duration;

use notes_fs::{ConfigStore, NormalizedPath};
use notes_git::TransportConfig;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, RetryPolicy};

/// Default config file name looked up in the working tree.
pub const CONFIG_FILE: &str = "notes-sync.toml";

/// Everything a run needs besides the work items and the transport.
///
/// Delays are stored in files as integer milliseconds:
///
/// ```toml
/// batch_size = 100
/// max_push_attempts = 3
/// retry_delay_ms = 10000
/// inter_batch_delay_ms = 1000
/// remote_name = "origin"
/// branch_name = "main"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Work items per stage/commit/push cycle
    pub batch_size: usize,

    /// Push attempts per batch before the run halts
    pub max_push_attempts: u32,

    /// Pause between push attempts
    #[serde(rename = "retry_delay_ms", with = "millis")]
    pub retry_delay: Duration,

    /// Pause after a pushed batch before the next one starts
    #[serde(rename = "inter_batch_delay_ms", with = "millis")]
    pub inter_batch_delay: Duration,

    pub remote_name: String,

    pub branch_name: String,

    /// Commit messages read `<prefix> batch <index> of <total>`
    pub commit_prefix: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let retry = RetryPolicy::standard();
        Self {
            batch_size: 100,
            max_push_attempts: retry.max_attempts,
            retry_delay: retry.delay,
            inter_batch_delay: Duration::from_secs(1),
            remote_name: "origin".to_string(),
            branch_name: "main".to_string(),
            commit_prefix: "Sync notes".to_string(),
        }
    }
}

impl SyncConfig {
    /// Load and validate a config file (TOML, JSON or YAML).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Write these settings to `path`; the format follows the extension.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn save(&self, path: &NormalizedPath, overwrite: bool) -> Result<()> {
        self.validate()?;
        let store = ConfigStore::new();
        if overwrite {
            store.save(path, self)?;
        } else {
            store.create(path, self)?;
        }
        Ok(())
    }

    /// Reject settings no run can use.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::configuration("batch_size must be a positive integer"));
        }
        if self.max_push_attempts == 0 {
            return Err(Error::configuration("max_push_attempts must be at least 1"));
        }
        if self.remote_name.trim().is_empty() {
            return Err(Error::configuration("remote_name must not be empty"));
        }
        if self.branch_name.trim().is_empty() {
            return Err(Error::configuration("branch_name must not be empty"));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_push_attempts, self.retry_delay)
    }

    pub fn commit_message(&self, index: usize, total: usize) -> String {
        format!("{} batch {} of {}", self.commit_prefix, index, total)
    }

    /// Transport settings for `work_dir` publishing to this remote/branch.
    pub fn transport_config(&self, work_dir: impl Into<PathBuf>) -> TransportConfig {
        TransportConfig::new(work_dir)
            .with_remote(&self.remote_name)
            .with_branch(&self.branch_name)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        let config = SyncConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.retry_policy(), RetryPolicy::standard());
    }

    #[rstest]
    #[case::zero_batch(SyncConfig { batch_size: 0, ..SyncConfig::default() })]
    #[case::zero_attempts(SyncConfig { max_push_attempts: 0, ..SyncConfig::default() })]
    #[case::blank_remote(SyncConfig { remote_name: " ".into(), ..SyncConfig::default() })]
    #[case::blank_branch(SyncConfig { branch_name: String::new(), ..SyncConfig::default() })]
    fn test_invalid_settings(#[case] config: SyncConfig) {
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_commit_message_names_batch() {
        let config = SyncConfig::default();
        assert_eq!(config.commit_message(2, 7), "Sync notes batch 2 of 7");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SyncConfig = toml::from_str(
            "batch_size = 25\nretry_delay_ms = 1500\nbranch_name = \"notes\"",
        )
        .unwrap();

        assert_eq!(config.batch_size, 25);
        assert_eq!(config.retry_delay, Duration::from_millis(1500));
        assert_eq!(config.branch_name, "notes");
        assert_eq!(config.max_push_attempts, 3);
        assert_eq!(config.inter_batch_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_transport_config_carries_remote_and_branch() {
        let config = SyncConfig {
            remote_name: "backup".into(),
            branch_name: "notes".into(),
            ..SyncConfig::default()
        };

        let transport = config.transport_config("/tmp/work");

        assert_eq!(transport.remote, "backup");
        assert_eq!(transport.branch, "notes");
        assert_eq!(transport.git_path, PathBuf::from("git"));
    }

    #[test]
    fn test_save_then_load_keeps_every_setting() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join(CONFIG_FILE));
        let config = SyncConfig {
            batch_size: 40,
            retry_delay: Duration::from_millis(2500),
            remote_name: "backup".into(),
            ..SyncConfig::default()
        };

        config.save(&path, false).unwrap();

        assert_eq!(SyncConfig::load(&path).unwrap(), config);
        let text = std::fs::read_to_string(path.to_native()).unwrap();
        assert!(text.contains("retry_delay_ms = 2500"), "{text}");
    }

    #[test]
    fn test_save_without_overwrite_keeps_existing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join(CONFIG_FILE));
        std::fs::write(path.to_native(), "batch_size = 7").unwrap();

        let err = SyncConfig::default().save(&path, false).unwrap_err();

        assert!(matches!(
            err,
            Error::Fs(notes_fs::Error::AlreadyExists { .. })
        ));
        assert_eq!(SyncConfig::load(&path).unwrap().batch_size, 7);

        SyncConfig::default().save(&path, true).unwrap();
        assert_eq!(SyncConfig::load(&path).unwrap().batch_size, 100);
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join(CONFIG_FILE));
        let config = SyncConfig {
            batch_size: 0,
            ..SyncConfig::default()
        };

        assert!(matches!(
            config.save(&path, false),
            Err(Error::Configuration { .. })
        ));
        assert!(!path.exists());
    }
}
