//! Item model.
//!
//! # Invariants
//! - `id` is unique across all live items and never reused.
//! - `created_at` is fixed at creation; only `text` is mutable.

use serde::{Deserialize, Serialize};

/// Stable identifier for a user-authored item.
pub type ItemId = u64;

/// A user-authored text record owned by exactly one container.
///
/// `created_at` is kept as the ISO-8601 string it was recorded with, so a
/// malformed persisted value degrades at render time instead of failing
/// deserialization of the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Item {
    /// Creates an item with the given identity and creation timestamp.
    pub fn new(id: ItemId, text: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: created_at.into(),
        }
    }
}
