//! Shared test utilities for the notes-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`git`]: real git repositories and bare remotes
//! - [`repo`]: [`SyncFixture`], a working tree wired to a local bare remote

pub mod git;
pub mod repo;

pub use repo::SyncFixture;
