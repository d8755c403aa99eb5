//! Container model and the fixed board layout.
//!
//! # Responsibility
//! - Define `Container` as an ordered holding place for items.
//! - Express per-slot behavior as an explicit role, not magic id checks.
//!
//! # Invariants
//! - `LAYOUT` is the complete container-id universe; no operation may
//!   reference an id outside it.
//! - Whether a slot accepts drops is a property of its role.

use crate::model::item::Item;
use serde::{Deserialize, Serialize};

/// Stable identifier for a board slot.
pub type ContainerId = u32;

/// Slot receiving newly created items.
pub const STAGING_CONTAINER: ContainerId = 2;
/// Slot mirroring the audit log; read-only from the drag layer.
pub const EVENT_LOG_CONTAINER: ContainerId = 9;
/// Slot triggering CSV export.
pub const EXPORT_CONTAINER: ContainerId = 10;

/// Behavioral role of a board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerRole {
    /// Fixed artwork panel; holds no user items.
    Decorative,
    /// Entry point for newly created items.
    Staging,
    /// Named work bucket items are sorted into.
    Bucket,
    /// Read-only mirror of the event log.
    EventLog,
    /// Export trigger slot.
    Export,
}

impl ContainerRole {
    /// Whether items may be dropped into a slot with this role.
    ///
    /// Only the decorative panel and the event-log mirror reject drops;
    /// the export slot accepts them like any bucket.
    pub fn is_droppable(self) -> bool {
        !matches!(self, Self::Decorative | Self::EventLog)
    }
}

/// Static description of one board slot.
#[derive(Debug, Clone, Copy)]
pub struct ContainerSpec {
    pub id: ContainerId,
    pub name: &'static str,
    pub role: ContainerRole,
}

/// The fixed board layout. Slot ids, display names, and roles never change
/// for the lifetime of the process.
pub const LAYOUT: &[ContainerSpec] = &[
    ContainerSpec {
        id: 1,
        name: "",
        role: ContainerRole::Decorative,
    },
    ContainerSpec {
        id: STAGING_CONTAINER,
        name: "Type pantsy",
        role: ContainerRole::Staging,
    },
    ContainerSpec {
        id: 3,
        name: "Peterborough",
        role: ContainerRole::Bucket,
    },
    ContainerSpec {
        id: 4,
        name: "Huntingdon",
        role: ContainerRole::Bucket,
    },
    ContainerSpec {
        id: 5,
        name: "Bedford",
        role: ContainerRole::Bucket,
    },
    ContainerSpec {
        id: 6,
        name: "Luton",
        role: ContainerRole::Bucket,
    },
    ContainerSpec {
        id: 7,
        name: "Edit",
        role: ContainerRole::Bucket,
    },
    ContainerSpec {
        id: 8,
        name: "Outstanding",
        role: ContainerRole::Bucket,
    },
    ContainerSpec {
        id: EVENT_LOG_CONTAINER,
        name: "Event Log",
        role: ContainerRole::EventLog,
    },
    ContainerSpec {
        id: EXPORT_CONTAINER,
        name: "Export Events",
        role: ContainerRole::Export,
    },
];

/// Looks up one slot in the fixed layout.
pub fn container_spec(id: ContainerId) -> Option<&'static ContainerSpec> {
    LAYOUT.iter().find(|spec| spec.id == id)
}

/// Display name for a slot, used when rendering move events.
pub fn container_name(id: ContainerId) -> Option<&'static str> {
    container_spec(id).map(|spec| spec.name)
}

/// Role for a slot.
pub fn container_role(id: ContainerId) -> Option<ContainerRole> {
    container_spec(id).map(|spec| spec.role)
}

/// One board slot and the items it currently owns.
///
/// Insertion order is display order. Serialized shape matches the persisted
/// `containers` record: `{id, items}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub items: Vec<Item>,
}

impl Container {
    /// Creates an empty container for one layout slot.
    pub fn empty(id: ContainerId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }
}
