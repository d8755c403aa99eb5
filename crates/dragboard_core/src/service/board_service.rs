//! Board mutation engine.
//!
//! # Responsibility
//! - Expose the five mutating operations: create, edit, delete, move, and
//!   log clear, plus read-only snapshots and CSV export.
//! - Validate intents, record audit events, commit store snapshots, and
//!   only then trigger best-effort persistence.
//!
//! # Invariants
//! - Mutations take `&mut self`, so each runs to completion before another
//!   may begin; readers only ever receive owned snapshots.
//! - A persistence failure is reported on the operator channel and never
//!   rolls back the in-memory mutation that triggered it.
//! - The event-log container always mirrors the recorder's current log.

use crate::export::events_to_csv;
use crate::model::container::{
    container_role, Container, ContainerId, EVENT_LOG_CONTAINER, STAGING_CONTAINER,
};
use crate::model::defaults::{
    default_containers, default_events, DEFAULT_NEXT_EVENT_ID, DEFAULT_NEXT_ITEM_ID,
};
use crate::model::event::{AuditEvent, EventId, EventKind};
use crate::model::item::{Item, ItemId};
use crate::recorder::{now_iso, EventRecorder};
use crate::repo::board_repo::BoardRepository;
use crate::repo::kv_repo::{KvRepository, RepoResult};
use crate::store::{EntityStore, StoreError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Engine error surfaced to the intent caller. No state changes on error.
#[derive(Debug)]
pub enum BoardServiceError {
    /// Rejected input: item text is empty after trimming.
    EmptyText,
    /// Referenced item does not exist in the referenced container.
    ItemNotFound {
        container_id: ContainerId,
        item_id: ItemId,
    },
    /// Referenced container is not part of the board layout.
    ContainerNotFound(ContainerId),
    /// Internal store invariant guard; unreachable through legal intents.
    Store(StoreError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "item text cannot be empty"),
            Self::ItemNotFound {
                container_id,
                item_id,
            } => write!(f, "item {item_id} not found in container {container_id}"),
            Self::ContainerNotFound(id) => write!(f, "container not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// The board state engine. Owns the entity store, the event recorder, and
/// the item-id counter; the persistence gateway is driven behind the same
/// facade. One instance per board; no ambient singletons.
pub struct BoardService<K: KvRepository> {
    store: EntityStore,
    recorder: EventRecorder,
    next_item_id: ItemId,
    repo: BoardRepository<K>,
}

impl<K: KvRepository> BoardService<K> {
    /// Loads the engine from the durable store, falling back to each
    /// record's default in isolation. Never fails: a broken store yields a
    /// usable default board plus operator-channel diagnostics.
    pub fn init(kv: K) -> Self {
        let repo = BoardRepository::new(kv);
        let seeded_at = now_iso();

        let containers = load_or_default("containers", repo.load_containers(), || {
            default_containers(&seeded_at)
        });
        let store = match EntityStore::new(containers) {
            Ok(store) => store,
            Err(err) => {
                warn!(
                    "event=state_load module=service status=fallback record=containers error={err}"
                );
                EntityStore::default_board(&seeded_at)
            }
        };

        let events = load_or_default("eventLog", repo.load_event_log(), || {
            default_events(&seeded_at)
        });
        let next_event_id = load_or_default("nextEventId", repo.load_next_event_id(), || {
            DEFAULT_NEXT_EVENT_ID
        });
        let next_item_id = load_or_default("nextId", repo.load_next_item_id(), || {
            DEFAULT_NEXT_ITEM_ID
        });

        let mut service = Self {
            store,
            recorder: EventRecorder::new(events, next_event_id),
            next_item_id,
            repo,
        };

        // The log record wins over whatever the containers record held in
        // the mirror slot.
        if let Err(err) = service.sync_event_mirror() {
            error!("event=state_load module=service status=error step=mirror error={err}");
        }
        service.persist_all();

        info!(
            "event=engine_init module=service status=ok events={} next_item_id={} next_event_id={}",
            service.recorder.events().len(),
            service.next_item_id,
            service.recorder.next_event_id()
        );
        service
    }

    /// Final best-effort persist. In-memory state is dropped afterwards.
    pub fn shutdown(self) {
        self.persist_all();
        info!("event=engine_shutdown module=service status=ok");
    }

    /// Creates an item in the staging container from raw input text.
    ///
    /// The recorder's timestamp becomes the item's `created_at`, so the
    /// `create` event and the item always correlate. The text is stored
    /// untrimmed; trimming only gates the empty check.
    pub fn create_item(&mut self, text: &str) -> Result<Item, BoardServiceError> {
        if text.trim().is_empty() {
            return Err(BoardServiceError::EmptyText);
        }

        let item_id = self.next_item_id;
        let created_at = self
            .recorder
            .record(EventKind::Create, item_id, text, None, None);
        let item = Item::new(item_id, text, created_at);

        let mut staging = self.items_owned(STAGING_CONTAINER)?;
        staging.push(item.clone());
        self.store.replace_items(STAGING_CONTAINER, staging)?;
        self.next_item_id += 1;

        self.sync_event_mirror()?;
        self.persist_all();
        Ok(item)
    }

    /// Replaces an item's text.
    ///
    /// Unchanged text is replaced idempotently without an audit entry, so
    /// focus-blur cycles do not spam the log; changed text records exactly
    /// one `edit` event carrying the resulting value.
    pub fn edit_item(
        &mut self,
        container_id: ContainerId,
        item_id: ItemId,
        new_text: &str,
    ) -> Result<(), BoardServiceError> {
        let current = self
            .store
            .find_item(container_id, item_id)
            .ok_or(BoardServiceError::ItemNotFound {
                container_id,
                item_id,
            })?;
        let changed = current.text != new_text;

        if changed {
            self.recorder
                .record(EventKind::Edit, item_id, new_text, None, None);
        }

        let items = self
            .items_owned(container_id)?
            .into_iter()
            .map(|mut item| {
                if item.id == item_id {
                    item.text = new_text.to_string();
                }
                item
            })
            .collect();
        self.store.replace_items(container_id, items)?;

        if changed {
            self.sync_event_mirror()?;
        }
        self.persist_all();
        Ok(())
    }

    /// Deletes an item, recording its pre-removal text in the audit entry.
    pub fn delete_item(
        &mut self,
        container_id: ContainerId,
        item_id: ItemId,
    ) -> Result<(), BoardServiceError> {
        let text = self
            .store
            .find_item(container_id, item_id)
            .map(|item| item.text.clone())
            .ok_or(BoardServiceError::ItemNotFound {
                container_id,
                item_id,
            })?;

        self.recorder
            .record(EventKind::Delete, item_id, &text, None, None);

        let items = self
            .items_owned(container_id)?
            .into_iter()
            .filter(|item| item.id != item_id)
            .collect();
        self.store.replace_items(container_id, items)?;

        self.sync_event_mirror()?;
        self.persist_all();
        Ok(())
    }

    /// Relocates an item between containers as one atomic snapshot swap.
    ///
    /// Silent no-ops: non-droppable target role, source equal to target,
    /// and a retry whose item already sits in the target. None of these
    /// records an event or touches state.
    pub fn move_item(
        &mut self,
        item_id: ItemId,
        source_id: ContainerId,
        target_id: ContainerId,
    ) -> Result<(), BoardServiceError> {
        let target_role =
            container_role(target_id).ok_or(BoardServiceError::ContainerNotFound(target_id))?;
        container_role(source_id).ok_or(BoardServiceError::ContainerNotFound(source_id))?;

        if !target_role.is_droppable() {
            return Ok(());
        }
        if source_id == target_id {
            return Ok(());
        }

        let Some(item) = self.store.find_item(source_id, item_id).cloned() else {
            if self.store.find_item(target_id, item_id).is_some() {
                // Retry of an already-applied move.
                return Ok(());
            }
            return Err(BoardServiceError::ItemNotFound {
                container_id: source_id,
                item_id,
            });
        };

        self.recorder.record(
            EventKind::Move,
            item_id,
            &item.text,
            Some(source_id),
            Some(target_id),
        );

        let source_items: Vec<Item> = self
            .items_owned(source_id)?
            .into_iter()
            .filter(|candidate| candidate.id != item_id)
            .collect();
        let mut target_items = self.items_owned(target_id)?;
        target_items.push(item);

        self.store
            .replace_many(vec![(source_id, source_items), (target_id, target_items)])?;

        self.sync_event_mirror()?;
        self.persist_all();
        Ok(())
    }

    /// Empties the audit log and its mirror container.
    ///
    /// The yes/no gate belongs to the caller; an unconfirmed call is a
    /// no-op returning `false`. The event-id counter survives the clear so
    /// future events continue the existing numbering.
    pub fn clear_event_log(&mut self, confirmed: bool) -> Result<bool, BoardServiceError> {
        if !confirmed {
            return Ok(false);
        }

        self.recorder.clear();
        self.sync_event_mirror()?;
        self.persist_all();
        Ok(true)
    }

    /// Renders the audit log as CSV. Read-only.
    pub fn export_csv(&self) -> String {
        events_to_csv(self.recorder.events())
    }

    /// Immutable snapshot of all containers for rendering.
    pub fn containers(&self) -> Vec<Container> {
        self.store.snapshot()
    }

    /// Immutable snapshot of the audit log, newest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.recorder.snapshot()
    }

    /// Id the next created item will receive.
    pub fn next_item_id(&self) -> ItemId {
        self.next_item_id
    }

    /// Id the next recorded event will receive.
    pub fn next_event_id(&self) -> EventId {
        self.recorder.next_event_id()
    }

    fn items_owned(&self, container_id: ContainerId) -> Result<Vec<Item>, BoardServiceError> {
        self.store
            .items(container_id)
            .map(<[Item]>::to_vec)
            .ok_or(BoardServiceError::ContainerNotFound(container_id))
    }

    fn sync_event_mirror(&mut self) -> Result<(), BoardServiceError> {
        let mirror = self
            .recorder
            .events()
            .iter()
            .map(|event| Item::new(event.id, event.text.clone(), event.created_at.clone()))
            .collect();
        self.store.replace_items(EVENT_LOG_CONTAINER, mirror)?;
        Ok(())
    }

    fn persist_all(&self) {
        let results: [(&str, RepoResult<()>); 4] = [
            ("containers", self.repo.save_containers(self.store.containers())),
            ("eventLog", self.repo.save_event_log(self.recorder.events())),
            ("nextId", self.repo.save_next_item_id(self.next_item_id)),
            (
                "nextEventId",
                self.repo.save_next_event_id(self.recorder.next_event_id()),
            ),
        ];

        for (record, result) in results {
            if let Err(err) = result {
                error!(
                    "event=state_save module=service status=error record={record} error={err}"
                );
            }
        }
    }
}

fn load_or_default<T>(
    record: &'static str,
    loaded: RepoResult<Option<T>>,
    default: impl FnOnce() -> T,
) -> T {
    match loaded {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(err) => {
            warn!("event=state_load module=service status=fallback record={record} error={err}");
            default()
        }
    }
}
