//! Checklist - A local-first personal task and checklist manager
//!
//! Tasks (with optional deadlines) and named lists of checkable sub-items,
//! persisted on the local device. The [`store::Store`] aggregate owns all
//! state and writes it through a pluggable key-value [`storage`] adapter
//! after every mutation; the CLI is a thin presentation layer on top.

pub mod domain;
pub mod storage;
pub mod store;
pub mod cli;

pub use domain::{ItemDraft, ItemId, List, ListId, ListItem, Task, TaskId};
pub use store::{Store, StoreError};
