//! Note and label data model
//!
//! Holds the normalized note list produced by importers and persists it
//! either as one aggregated backup document or as a sharded per-note
//! layout that can be committed in batches.

pub mod backup;
pub mod error;
pub mod note;
pub mod shard;

pub use backup::Backup;
pub use error::{Error, Result};
pub use note::{Label, Note};
pub use shard::{ShardReport, ShardWriter};
