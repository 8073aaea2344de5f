//! Typed identifiers for tasks, lists, and list items
//!
//! ID Format:
//! - Task IDs: `t-{7-char-hash}` (e.g., `t-9d3e5f2`)
//! - List IDs: `l-{7-char-hash}` (e.g., `l-7f2b4c1`)
//! - Item IDs: `i-{7-char-hash}` (e.g., `i-04acd19`)
//!
//! Hash is derived from text + creation timestamp, ensuring uniqueness.
//! Same text at different times produces different IDs (by design).
//! Items carry their own IDs so that edits and deletes address a stable
//! identity instead of a position that shifts under earlier deletes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID format: expected 't-{{7-char-hash}}', got '{0}'")]
    InvalidTaskId(String),

    #[error("Invalid list ID format: expected 'l-{{7-char-hash}}', got '{0}'")]
    InvalidListId(String),

    #[error("Invalid item ID format: expected 'i-{{7-char-hash}}', got '{0}'")]
    InvalidItemId(String),
}

/// Generates a 7-character hash from text and timestamp
fn generate_hash(text: &str, timestamp: DateTime<Utc>) -> String {
    let input = format!("{}{}", text, timestamp.timestamp_nanos_opt().unwrap_or(0));
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Checks a candidate hash segment: exactly 7 hex chars
fn valid_hash(hash: &str) -> bool {
    hash.len() == 7 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

macro_rules! typed_id {
    ($name:ident, $prefix:literal, $error:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            hash: String,
        }

        impl $name {
            /// Creates a new ID from the entity's text and creation timestamp
            pub fn new(text: &str, timestamp: DateTime<Utc>) -> Self {
                Self {
                    hash: generate_hash(text, timestamp),
                }
            }

            /// Returns the hash portion of the ID
            pub fn hash(&self) -> &str {
                &self.hash
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.hash)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let hash = s
                    .strip_prefix(concat!($prefix, "-"))
                    .ok_or_else(|| IdError::$error(s.to_string()))?;

                if !valid_hash(hash) {
                    return Err(IdError::$error(s.to_string()));
                }

                Ok(Self {
                    hash: hash.to_string(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

typed_id!(TaskId, "t", InvalidTaskId, "Task ID in the format `t-{7-char-hash}`");
typed_id!(ListId, "l", InvalidListId, "List ID in the format `l-{7-char-hash}`");
typed_id!(ItemId, "i", InvalidItemId, "Item ID in the format `i-{7-char-hash}`");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_is_unique_for_different_timestamps() {
        let text = "Same text";
        let ts1 = Utc::now();
        let ts2 = ts1 + chrono::Duration::nanoseconds(1);

        let id1 = TaskId::new(text, ts1);
        let id2 = TaskId::new(text, ts2);

        assert_ne!(id1, id2);
    }

    #[test]
    fn task_id_format_is_correct() {
        let id = TaskId::new("Buy milk", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("t-"));
        assert_eq!(s.len(), 9); // "t-" + 7 chars
    }

    #[test]
    fn list_id_format_is_correct() {
        let id = ListId::new("Groceries", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("l-"));
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn item_id_format_is_correct() {
        let id = ItemId::new("Milk", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("i-"));
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn task_id_parses_correctly() {
        let original = TaskId::new("Buy milk", Utc::now());
        let s = original.to_string();
        let parsed: TaskId = s.parse().unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn task_id_rejects_invalid_format() {
        assert!("invalid".parse::<TaskId>().is_err());
        assert!("t-short".parse::<TaskId>().is_err());
        assert!("t-toolonggg".parse::<TaskId>().is_err());
        assert!("t-gggggg1".parse::<TaskId>().is_err()); // 'g' is not hex
        assert!("l-1234567".parse::<TaskId>().is_err()); // wrong prefix
    }

    #[test]
    fn list_id_rejects_task_prefix() {
        assert!("t-1234567".parse::<ListId>().is_err());
        assert!("l-1234567".parse::<ListId>().is_ok());
    }

    #[test]
    fn id_parse_trims_whitespace() {
        let parsed: TaskId = "  t-1234567  ".parse().unwrap();
        assert_eq!(parsed.hash(), "1234567");
    }

    #[test]
    fn serde_roundtrip_task_id() {
        let original = TaskId::new("Buy milk", Utc::now());
        let json = serde_json::to_string(&original).unwrap();
        let parsed: TaskId = serde_json::from_str(&json).unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn serde_roundtrip_item_id() {
        let original = ItemId::new("Milk", Utc::now());
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ItemId = serde_json::from_str(&json).unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn serde_rejects_malformed_id_strings() {
        assert!(serde_json::from_str::<TaskId>("\"garbage\"").is_err());
        assert!(serde_json::from_str::<ListId>("\"t-1234567\"").is_err());
    }
}
