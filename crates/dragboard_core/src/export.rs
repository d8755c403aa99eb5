//! CSV rendering of the audit log.
//!
//! # Responsibility
//! - Produce the one bit-exact external artifact: the event-log CSV.
//!
//! # Invariants
//! - Row order is the log's current order (newest first), unchanged.
//! - The event-text field is always double-quoted, embedded quotes doubled;
//!   the other fields are emitted unquoted.
//! - Rows are joined by `\n` with no trailing separator.

use crate::model::event::AuditEvent;

const CSV_HEADER: &str = "ID,Event,Created At,Type";

/// Renders the event log as CSV. Read-only; handing the string to a
/// clipboard or file is the caller's concern.
pub fn events_to_csv(events: &[AuditEvent]) -> String {
    let mut rows = Vec::with_capacity(events.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for event in events {
        rows.push(format!(
            "{},\"{}\",{},{}",
            event.id,
            event.text.replace('"', "\"\""),
            event.created_at,
            event.kind.as_str()
        ));
    }
    rows.join("\n")
}
