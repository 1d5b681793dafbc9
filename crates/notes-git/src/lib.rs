//! Git plumbing for notes-sync
//!
//! Lists the files that need synchronizing and wraps the three remote
//! primitives (stage, commit, push) behind the [`Transport`] trait.

pub mod cli;
pub mod commits;
pub mod enumerate;
pub mod error;
pub mod transport;
pub mod work_item;

pub use cli::{GitCli, TransportConfig};
pub use commits::{CommitInfo, pending_commits};
pub use enumerate::{EnumerateMode, Enumerator};
pub use error::{Error, Result};
pub use transport::{Transport, TransportResult};
pub use work_item::WorkItem;
