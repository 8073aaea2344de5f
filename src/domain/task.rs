//! Task domain model
//!
//! A task is a single to-do entry: display text, an optional deadline,
//! and a completion flag. Apart from the completion toggle no field is
//! ever mutated after creation.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation and never reused
    pub id: TaskId,

    /// Display text (non-blank at creation)
    pub text: String,

    /// Optional calendar deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a new task with a fresh ID. Callers validate the text first.
    pub fn new(text: impl Into<String>, deadline: Option<NaiveDate>) -> Self {
        let text = text.into();
        Self {
            id: TaskId::new(&text, Utc::now()),
            text,
            deadline,
            completed: false,
        }
    }

    /// Flips the completion flag and returns the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
