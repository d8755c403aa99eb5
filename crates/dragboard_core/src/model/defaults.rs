//! Default dataset used when a persisted record is missing or corrupt.
//!
//! Each record falls back independently, so for example a corrupt event log
//! does not force containers back to this seed.

use crate::model::container::{Container, LAYOUT};
use crate::model::event::{AuditEvent, EventId, EventKind};
use crate::model::item::{Item, ItemId};

/// First item id handed out on a fresh board (the seed uses ids 1..=6 with
/// id 2 retired).
pub const DEFAULT_NEXT_ITEM_ID: ItemId = 7;

/// First event id handed out on a fresh board (one past the seeded log).
pub const DEFAULT_NEXT_EVENT_ID: EventId = 6;

/// Seed items and the slots they start in.
const SEED_ITEMS: &[(u32, ItemId, &str)] = &[
    (3, 1, "Text box 1"),
    (4, 3, "Text box 3"),
    (5, 4, "Text box 4"),
    (5, 5, "Text box 5"),
    (7, 6, "Text box 6"),
];

/// Builds the default container set, seeded with the stock items.
///
/// `created_at` stamps every seed item; callers pass the current time.
pub fn default_containers(created_at: &str) -> Vec<Container> {
    LAYOUT
        .iter()
        .map(|spec| Container {
            id: spec.id,
            items: SEED_ITEMS
                .iter()
                .filter(|(slot, _, _)| *slot == spec.id)
                .map(|(_, id, text)| Item::new(*id, *text, created_at))
                .collect(),
        })
        .collect()
}

/// Builds the default audit log: one `create` entry per seed item, oldest
/// last (the log reads newest-first).
pub fn default_events(created_at: &str) -> Vec<AuditEvent> {
    let entries = [
        (1, "ID: 1 \"Text box 1\" created"),
        (2, "ID: 3 \"Text box 3\" created"),
        (3, "ID: 4 \"Text box 4\" created"),
        (4, "ID: 5 \"Text box 5\" created"),
        (5, "ID: 6 \"Text box 6\" created"),
    ];
    entries
        .iter()
        .rev()
        .map(|(id, text)| AuditEvent {
            id: *id,
            text: (*text).to_string(),
            created_at: created_at.to_string(),
            kind: EventKind::Create,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{default_containers, default_events, DEFAULT_NEXT_EVENT_ID, DEFAULT_NEXT_ITEM_ID};

    #[test]
    fn seed_matches_layout_slots() {
        let containers = default_containers("2026-08-05T10:00:00.000Z");
        assert_eq!(containers.len(), 10);
        let bedford = containers.iter().find(|c| c.id == 5).unwrap();
        assert_eq!(bedford.items.len(), 2);
        assert_eq!(bedford.items[0].text, "Text box 4");
        let staging = containers.iter().find(|c| c.id == 2).unwrap();
        assert!(staging.items.is_empty());
    }

    #[test]
    fn counters_point_past_the_seed() {
        let containers = default_containers("2026-08-05T10:00:00.000Z");
        let max_item = containers
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|item| item.id)
            .max()
            .unwrap();
        assert_eq!(DEFAULT_NEXT_ITEM_ID, max_item + 1);

        let events = default_events("2026-08-05T10:00:00.000Z");
        assert_eq!(events.len(), 5);
        assert_eq!(DEFAULT_NEXT_EVENT_ID, events.len() as u64 + 1);
    }

    #[test]
    fn seeded_log_reads_newest_first() {
        let events = default_events("2026-08-05T10:00:00.000Z");
        assert_eq!(events.first().unwrap().id, 5);
        assert_eq!(events.last().unwrap().id, 1);
    }
}
