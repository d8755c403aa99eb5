//! Audit event model.
//!
//! # Responsibility
//! - Define the immutable audit record describing one item lifecycle action.
//!
//! # Invariants
//! - Events are never edited after recording; the log is append-only apart
//!   from an explicit wholesale clear.
//! - `text` is the fully rendered description, not a template.

use serde::{Deserialize, Serialize};

/// Stable identifier for an audit event. Independent of item ids.
pub type EventId = u64;

/// Classification of an audit event.
///
/// `Unknown` doubles as the serde fallback so an unexpected persisted
/// `type` string still loads instead of poisoning the whole log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Create,
    Edit,
    Delete,
    Move,
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Lowercase wire/CSV spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Move => "move",
            Self::Unknown => "unknown",
        }
    }
}

/// One immutable audit log entry.
///
/// Serialized shape matches the persisted `eventLog` record:
/// `{id, text, createdAt, type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: EventId,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}
