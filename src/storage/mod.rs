//! # Storage Layer
//!
//! Persistence substrate for the checklist store.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSON array | `{data_dir}/tasks.json` |
//! | Lists | JSON array | `{data_dir}/lists.json` |
//! | Config | TOML | `{config_dir}/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`FileAdapter`] uses file locking (`fs2`) and atomic temp-file+rename
//!   writes. Multi-process access is last-writer-wins with no merge.
//! - [`MemoryAdapter`] backs tests and throwaway sessions.
//!
//! The store only sees the [`StorageAdapter`] trait; which backend it talks
//! to is the caller's choice.

mod adapter;
mod file;
mod config;

pub use adapter::{MemoryAdapter, StorageAdapter};
pub use file::FileAdapter;
pub use config::{Config, ConfigError};
