//! In-memory entity store for containers and their items.
//!
//! # Responsibility
//! - Own the mapping from container id to its ordered item sequence.
//! - Apply every mutation as a whole-snapshot swap so readers observe either
//!   the pre- or post-mutation state, never a torn intermediate.
//!
//! # Invariants
//! - The container-id set always equals the fixed board layout.
//! - No item id appears in more than one container's sequence. The event-log
//!   mirror is exempt: its items carry event ids, a separate id space.

use crate::model::container::{container_role, Container, ContainerId, ContainerRole, LAYOUT};
use crate::model::item::{Item, ItemId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Invariant violation reported by the entity store.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Referenced container id is not part of the fixed layout.
    UnknownContainer(ContainerId),
    /// A layout slot is missing from the supplied container set.
    MissingContainer(ContainerId),
    /// An item id would appear in more than one container.
    DuplicateItem(ItemId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownContainer(id) => write!(f, "unknown container id: {id}"),
            Self::MissingContainer(id) => write!(f, "container id {id} missing from layout set"),
            Self::DuplicateItem(id) => {
                write!(f, "item id {id} would appear in more than one container")
            }
        }
    }
}

impl Error for StoreError {}

/// Owns all containers; the mutation engine is its only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore {
    containers: Vec<Container>,
}

impl EntityStore {
    /// Builds a store from a complete container set.
    ///
    /// The set must cover exactly the fixed layout ids; containers are
    /// normalized into layout order. Item-id uniqueness is enforced.
    pub fn new(containers: Vec<Container>) -> StoreResult<Self> {
        for container in &containers {
            if container_role(container.id).is_none() {
                return Err(StoreError::UnknownContainer(container.id));
            }
        }

        let mut ordered = Vec::with_capacity(LAYOUT.len());
        for spec in LAYOUT {
            let container = containers
                .iter()
                .find(|container| container.id == spec.id)
                .cloned()
                .ok_or(StoreError::MissingContainer(spec.id))?;
            ordered.push(container);
        }

        check_item_uniqueness(&ordered)?;
        Ok(Self { containers: ordered })
    }

    /// Builds the default seeded board. Infallible; used by fallback paths.
    pub fn default_board(created_at: &str) -> Self {
        Self {
            containers: crate::model::defaults::default_containers(created_at),
        }
    }

    /// Read-only view of all containers in layout order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Full owned copy handed to external readers.
    pub fn snapshot(&self) -> Vec<Container> {
        self.containers.clone()
    }

    /// Current item sequence of one container.
    pub fn items(&self, container_id: ContainerId) -> Option<&[Item]> {
        self.containers
            .iter()
            .find(|container| container.id == container_id)
            .map(|container| container.items.as_slice())
    }

    /// Finds one item inside one container.
    pub fn find_item(&self, container_id: ContainerId, item_id: ItemId) -> Option<&Item> {
        self.items(container_id)?
            .iter()
            .find(|item| item.id == item_id)
    }

    /// Replaces one container's item sequence as a snapshot swap.
    pub fn replace_items(
        &mut self,
        container_id: ContainerId,
        items: Vec<Item>,
    ) -> StoreResult<()> {
        self.replace_many(vec![(container_id, items)])
    }

    /// Replaces several containers' item sequences in one snapshot swap.
    ///
    /// This is the commit primitive for moves: removing from the source and
    /// appending to the target land atomically, so an item can never be
    /// observed in both or neither container.
    pub fn replace_many(
        &mut self,
        updates: Vec<(ContainerId, Vec<Item>)>,
    ) -> StoreResult<()> {
        let mut next = self.containers.clone();
        for (container_id, items) in updates {
            let slot = next
                .iter_mut()
                .find(|container| container.id == container_id)
                .ok_or(StoreError::UnknownContainer(container_id))?;
            slot.items = items;
        }

        check_item_uniqueness(&next)?;
        self.containers = next;
        Ok(())
    }
}

fn check_item_uniqueness(containers: &[Container]) -> StoreResult<()> {
    let mut seen: Vec<ItemId> = Vec::new();
    for container in containers {
        if container_role(container.id) == Some(ContainerRole::EventLog) {
            continue;
        }
        for item in &container.items {
            if seen.contains(&item.id) {
                return Err(StoreError::DuplicateItem(item.id));
            }
            seen.push(item.id);
        }
    }
    Ok(())
}
