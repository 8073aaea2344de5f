//! Key-value persistence contract
//!
//! The store depends on this trait, not on any particular backend: it
//! reads serialized collections by key at startup and writes them back
//! after every mutation. Tests inject [`MemoryAdapter`] to exercise the
//! store without touching the filesystem.

use std::collections::HashMap;

use anyhow::Result;

/// A durable key-value substrate for serialized collections
pub trait StorageAdapter {
    /// Reads the payload stored under `key`, or None if absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous payload
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory adapter for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    entries: HashMap<String, String>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, e.g. to simulate a previous session's payload
    pub fn seed(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl StorageAdapter for MemoryAdapter {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_absent_key_returns_none() {
        let adapter = MemoryAdapter::new();
        assert!(adapter.read("tasks").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut adapter = MemoryAdapter::new();
        adapter.write("tasks", "[]").unwrap();

        assert_eq!(adapter.read("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_replaces_previous_payload() {
        let mut adapter = MemoryAdapter::new();
        adapter.write("tasks", "[]").unwrap();
        adapter.write("tasks", "[1]").unwrap();

        assert_eq!(adapter.read("tasks").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn seeded_payload_is_readable() {
        let adapter = MemoryAdapter::new().seed("lists", "[]");
        assert_eq!(adapter.read("lists").unwrap().as_deref(), Some("[]"));
    }
}
