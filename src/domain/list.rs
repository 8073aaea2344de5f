//! List domain model
//!
//! A list is a named, ordered collection of checkable sub-items. Items are
//! exclusively owned by their parent list and carry their own IDs, so edits
//! and deletes stay addressed to the same item even after earlier deletes
//! shift positions. Insertion order is preserved; there is no reordering.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::id::{ItemId, ListId};

/// A checkable entry inside a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Unique identifier, assigned at creation
    pub id: ItemId,

    /// Display text (non-blank at creation; edits may blank it)
    pub text: String,

    /// Whether the item has been checked off
    #[serde(default)]
    pub done: bool,
}

impl ListItem {
    /// Creates a new item with a fresh ID
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        let text = text.into();
        Self {
            id: ItemId::new(&text, Utc::now()),
            text,
            done,
        }
    }
}

/// Input shape for list creation
///
/// A draft keeps the `done` flag a composition form may already carry,
/// so lists built from pre-checked templates survive normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub text: String,
    pub done: bool,
}

impl ItemDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub fn done(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: true,
        }
    }
}

impl From<&str> for ItemDraft {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A named, ordered collection of checkable sub-items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Unique identifier, assigned at creation
    pub id: ListId,

    /// Display title (non-blank at creation)
    pub title: String,

    /// Sub-items in insertion order
    pub items: Vec<ListItem>,
}

impl List {
    /// Creates a new list from normalized items. Callers validate first.
    pub fn new(title: impl Into<String>, items: Vec<ListItem>) -> Self {
        let title = title.into();
        Self {
            id: ListId::new(&title, Utc::now()),
            title,
            items,
        }
    }

    /// Normalizes drafts for creation: trims text, drops blank entries,
    /// keeps the `done` flags of what survives.
    pub fn normalize_drafts(drafts: &[ItemDraft]) -> Vec<ListItem> {
        drafts
            .iter()
            .filter(|d| !d.text.trim().is_empty())
            .map(|d| ListItem::new(d.text.trim(), d.done))
            .collect()
    }

    /// Looks up an item by ID
    pub fn item(&self, item_id: &ItemId) -> Option<&ListItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// Looks up an item by ID, mutably
    pub fn item_mut(&mut self, item_id: &ItemId) -> Option<&mut ListItem> {
        self.items.iter_mut().find(|i| &i.id == item_id)
    }

    /// Returns the number of checked-off items
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|i| i.done).count()
    }
}
