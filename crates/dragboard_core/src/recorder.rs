//! Append-only audit log recorder.
//!
//! # Responsibility
//! - Render human-readable audit text at record time (never templates).
//! - Own the monotonic event-id counter.
//!
//! # Invariants
//! - New events are prepended; the log always reads newest-first.
//! - Clearing the log never resets the event-id counter, so ids stay
//!   globally unique across the process lifetime.
//! - Rendering never fails: malformed timestamps and unresolvable container
//!   names degrade to the literal `unknown`.

use crate::model::container::{container_name, ContainerId};
use crate::model::event::{AuditEvent, EventId, EventKind};
use crate::model::item::ItemId;
use chrono::{DateTime, Local, SecondsFormat, Utc};

const UNKNOWN_FIELD: &str = "unknown";

/// Current time as the ISO-8601 string stored in `created_at` fields.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Splits an ISO-8601 timestamp into local `DD/MM/YYYY` and `HH:MM` parts.
///
/// A value that fails RFC-3339 parsing yields `("unknown", "unknown")`
/// rather than an error; cosmetic rendering must never block an operation.
pub fn format_timestamp(iso: &str) -> (String, String) {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => {
            let local = parsed.with_timezone(&Local);
            (
                local.format("%d/%m/%Y").to_string(),
                local.format("%H:%M").to_string(),
            )
        }
        Err(_) => (UNKNOWN_FIELD.to_string(), UNKNOWN_FIELD.to_string()),
    }
}

fn display_name(id: Option<ContainerId>) -> &'static str {
    id.and_then(container_name).unwrap_or(UNKNOWN_FIELD)
}

fn render_event_text(
    kind: EventKind,
    item_id: ItemId,
    item_text: &str,
    source: Option<ContainerId>,
    target: Option<ContainerId>,
    timestamp: &str,
) -> String {
    let (date, time) = format_timestamp(timestamp);
    match kind {
        EventKind::Create => {
            format!("ID: {item_id} \"{item_text}\" created on: {date} at: {time}")
        }
        EventKind::Move => {
            let from = display_name(source);
            let to = display_name(target);
            format!(
                "ID: {item_id} \"{item_text}\" moved from \"{from}\" \u{2192} \"{to}\" on: {date} at: {time}"
            )
        }
        EventKind::Edit => {
            format!("ID: {item_id} text changed to \"{item_text}\" on: {date} at: {time}")
        }
        EventKind::Delete => {
            format!("ID: {item_id} \"{item_text}\" deleted on: {date} at: {time}")
        }
        EventKind::Unknown => {
            format!("ID: {item_id} unknown event on: {date} at: {time}")
        }
    }
}

/// Newest-first audit log plus its id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecorder {
    events: Vec<AuditEvent>,
    next_event_id: EventId,
}

impl EventRecorder {
    /// Restores a recorder from persisted (or default) state.
    pub fn new(events: Vec<AuditEvent>, next_event_id: EventId) -> Self {
        Self {
            events,
            next_event_id,
        }
    }

    /// Read-only view of the log, newest first.
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Full owned copy handed to external readers.
    pub fn snapshot(&self) -> Vec<AuditEvent> {
        self.events.clone()
    }

    /// Id the next recorded event will receive.
    pub fn next_event_id(&self) -> EventId {
        self.next_event_id
    }

    /// Records one audit entry and returns the timestamp it used, so the
    /// caller can correlate a `create` event with the item's `created_at`.
    ///
    /// `source`/`target` are only consulted for `Move` events, where they
    /// resolve to the containers' display names.
    pub fn record(
        &mut self,
        kind: EventKind,
        item_id: ItemId,
        item_text: &str,
        source: Option<ContainerId>,
        target: Option<ContainerId>,
    ) -> String {
        let timestamp = now_iso();
        let text = render_event_text(kind, item_id, item_text, source, target, &timestamp);

        self.events.insert(
            0,
            AuditEvent {
                id: self.next_event_id,
                text,
                created_at: timestamp.clone(),
                kind,
            },
        );
        self.next_event_id += 1;
        timestamp
    }

    /// Empties the log. The id counter is deliberately left untouched.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
