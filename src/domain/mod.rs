//! Domain models for the checklist manager
//!
//! Contains the core data model without any I/O concerns.

mod id;
mod task;
mod list;

pub use id::{IdError, ItemId, ListId, TaskId};
pub use task::Task;
pub use list::{ItemDraft, List, ListItem};
