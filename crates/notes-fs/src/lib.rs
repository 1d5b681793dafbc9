//! Filesystem helpers for notes-sync
//!
//! Provides separator-stable paths, atomic writes and a format-agnostic
//! config store shared by the other crates.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_identifier};
