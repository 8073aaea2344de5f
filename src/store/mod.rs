//! # Checklist Store
//!
//! The aggregate root owning the task and list collections. All mutation
//! goes through this type; every successful mutation is followed
//! synchronously by a full write of both collections through the injected
//! [`StorageAdapter`]. In-memory state is authoritative for the session:
//! a failed write surfaces as [`StoreError::Persist`] but the mutation
//! stands (best-effort persistence).
//!
//! Invalid input is rejected without mutating state and reported as a
//! typed [`StoreError`], so presentation can tell a rejected submission
//! from a successful one.
//!
//! Collections keep insertion order for display; creates append at the end
//! and no operation reorders.

mod highlight;

pub use highlight::{HighlightController, HighlightToken, HighlightTone, HIGHLIGHT_DURATION};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{ItemDraft, ItemId, List, ListId, ListItem, Task, TaskId};
use crate::storage::StorageAdapter;

/// Storage key for the serialized task collection
pub const TASKS_KEY: &str = "tasks";

/// Storage key for the serialized list collection
pub const LISTS_KEY: &str = "lists";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task text must not be blank")]
    BlankTask,

    #[error("List title must not be blank")]
    BlankTitle,

    #[error("A list needs at least one non-blank item")]
    EmptyItems,

    #[error("Item text must not be blank")]
    BlankItem,

    #[error("No task with ID {0}")]
    UnknownTask(TaskId),

    #[error("No list with ID {0}")]
    UnknownList(ListId),

    #[error("No item {0} in list {1}")]
    UnknownItem(ItemId, ListId),

    #[error("Failed to persist store state")]
    Persist(#[source] anyhow::Error),
}

/// The single source of truth for tasks and lists
pub struct Store<A: StorageAdapter> {
    tasks: Vec<Task>,
    lists: Vec<List>,
    highlight: HighlightController,
    adapter: A,
}

impl<A: StorageAdapter> Store<A> {
    /// Loads the store from the adapter. An absent or unparseable payload
    /// degrades to the empty collection; startup never fails on bad data.
    pub fn load(adapter: A) -> Self {
        let tasks = read_collection(&adapter, TASKS_KEY);
        let lists = read_collection(&adapter, LISTS_KEY);

        Self {
            tasks,
            lists,
            highlight: HighlightController::new(),
            adapter,
        }
    }

    /// All tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All lists, in insertion order
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Looks up a task by ID
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Looks up a list by ID
    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Read-only highlight state for presentation
    pub fn highlight(&self) -> &HighlightController {
        &self.highlight
    }

    /// Mutable highlight access, for presentation layers that schedule
    /// their own deferred clears
    pub fn highlight_mut(&mut self) -> &mut HighlightController {
        &mut self.highlight
    }

    /// The underlying adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    // -------------------------------------------------------------------
    // Task operations
    // -------------------------------------------------------------------

    /// Creates a task. Rejects blank trimmed text without mutating state.
    pub fn create_task(
        &mut self,
        text: &str,
        deadline: Option<NaiveDate>,
    ) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::BlankTask);
        }

        let task = Task::new(text, deadline);
        self.tasks.push(task.clone());
        self.persist()?;

        Ok(task)
    }

    /// Removes a task. Returns false (collection unchanged) on unknown ID.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<bool, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);

        if self.tasks.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Flips a task's completion flag and returns the new value together
    /// with the highlight token for the triggered feedback window.
    pub fn toggle_task(&mut self, id: &TaskId) -> Result<(bool, HighlightToken), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::UnknownTask(id.clone()))?;

        let completed = task.toggle();
        self.persist()?;

        // Highlight carries the task's new completed value
        let token = self.highlight.trigger(id.clone(), completed);

        Ok((completed, token))
    }

    // -------------------------------------------------------------------
    // List operations
    // -------------------------------------------------------------------

    /// Creates a list from a title and item drafts. Drafts are trimmed and
    /// blank entries dropped; surviving `done` flags are preserved. Rejects
    /// a blank title or an item set that normalizes to nothing.
    pub fn create_list(&mut self, title: &str, drafts: &[ItemDraft]) -> Result<List, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::BlankTitle);
        }

        let items = List::normalize_drafts(drafts);
        if items.is_empty() {
            return Err(StoreError::EmptyItems);
        }

        let list = List::new(title, items);
        self.lists.push(list.clone());
        self.persist()?;

        Ok(list)
    }

    /// Removes a list and all its items. Returns false on unknown ID.
    pub fn remove_list(&mut self, id: &ListId) -> Result<bool, StoreError> {
        let before = self.lists.len();
        self.lists.retain(|l| &l.id != id);

        if self.lists.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Appends an unchecked item to a list. Rejects blank text.
    pub fn add_item(&mut self, list_id: &ListId, text: &str) -> Result<ListItem, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::BlankItem);
        }

        let list = self
            .lists
            .iter_mut()
            .find(|l| &l.id == list_id)
            .ok_or_else(|| StoreError::UnknownList(list_id.clone()))?;

        let item = ListItem::new(text, false);
        list.items.push(item.clone());
        self.persist()?;

        Ok(item)
    }

    /// Removes an item from a list. Returns false when the list or item
    /// is unknown (collection unchanged).
    pub fn remove_item(&mut self, list_id: &ListId, item_id: &ItemId) -> Result<bool, StoreError> {
        let Some(list) = self.lists.iter_mut().find(|l| &l.id == list_id) else {
            return Ok(false);
        };

        let before = list.items.len();
        list.items.retain(|i| &i.id != item_id);

        if list.items.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Flips an item's done flag and returns the new value.
    pub fn toggle_item(&mut self, list_id: &ListId, item_id: &ItemId) -> Result<bool, StoreError> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| &l.id == list_id)
            .ok_or_else(|| StoreError::UnknownList(list_id.clone()))?;

        let item = list
            .item_mut(item_id)
            .ok_or_else(|| StoreError::UnknownItem(item_id.clone(), list_id.clone()))?;

        item.done = !item.done;
        let done = item.done;
        self.persist()?;

        Ok(done)
    }

    /// Overwrites an item's text unconditionally, including to the empty
    /// string. The edit path is deliberately permissive; only the creation
    /// paths validate non-blankness.
    pub fn edit_item(
        &mut self,
        list_id: &ListId,
        item_id: &ItemId,
        new_text: &str,
    ) -> Result<(), StoreError> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| &l.id == list_id)
            .ok_or_else(|| StoreError::UnknownList(list_id.clone()))?;

        let item = list
            .item_mut(item_id)
            .ok_or_else(|| StoreError::UnknownItem(item_id.clone(), list_id.clone()))?;

        item.text = new_text.to_string();
        self.persist()?;

        Ok(())
    }

    // -------------------------------------------------------------------

    /// Writes both collections in full through the adapter
    fn persist(&mut self) -> Result<(), StoreError> {
        let tasks = serde_json::to_string(&self.tasks)
            .map_err(|e| StoreError::Persist(e.into()))?;
        self.adapter
            .write(TASKS_KEY, &tasks)
            .map_err(StoreError::Persist)?;

        let lists = serde_json::to_string(&self.lists)
            .map_err(|e| StoreError::Persist(e.into()))?;
        self.adapter
            .write(LISTS_KEY, &lists)
            .map_err(StoreError::Persist)?;

        Ok(())
    }
}

/// Deserializes one collection from the adapter, degrading to empty on
/// absent, unreadable, or unparseable payloads
fn read_collection<A, T>(adapter: &A, key: &str) -> Vec<T>
where
    A: StorageAdapter,
    T: serde::de::DeserializeOwned,
{
    match adapter.read(key) {
        Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_default(),
        _ => Vec::new(),
    }
}
