//! Typed record codecs over the key-value contract.
//!
//! # Responsibility
//! - Persist and restore the four logical board records independently:
//!   `containers`, `eventLog`, `nextId`, `nextEventId`.
//! - Keep the wire shapes stable: JSON for the two sequences, decimal
//!   strings for the two counters.
//!
//! # Invariants
//! - A value that exists but cannot be decoded yields `InvalidData`; the
//!   caller decides the fallback (the engine defaults that record only).

use crate::model::container::Container;
use crate::model::event::{AuditEvent, EventId};
use crate::model::item::ItemId;
use crate::repo::kv_repo::{KvRepository, RepoError, RepoResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const KEY_CONTAINERS: &str = "containers";
pub const KEY_EVENT_LOG: &str = "eventLog";
pub const KEY_NEXT_ITEM_ID: &str = "nextId";
pub const KEY_NEXT_EVENT_ID: &str = "nextEventId";

/// Record-level persistence gateway over any key-value store.
pub struct BoardRepository<K: KvRepository> {
    kv: K,
}

impl<K: KvRepository> BoardRepository<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn save_containers(&self, containers: &[Container]) -> RepoResult<()> {
        self.save_json(KEY_CONTAINERS, &containers)
    }

    pub fn load_containers(&self) -> RepoResult<Option<Vec<Container>>> {
        self.load_json(KEY_CONTAINERS)
    }

    pub fn save_event_log(&self, events: &[AuditEvent]) -> RepoResult<()> {
        self.save_json(KEY_EVENT_LOG, &events)
    }

    pub fn load_event_log(&self) -> RepoResult<Option<Vec<AuditEvent>>> {
        self.load_json(KEY_EVENT_LOG)
    }

    pub fn save_next_item_id(&self, next_id: ItemId) -> RepoResult<()> {
        self.kv.save(KEY_NEXT_ITEM_ID, &next_id.to_string())
    }

    pub fn load_next_item_id(&self) -> RepoResult<Option<ItemId>> {
        self.load_counter(KEY_NEXT_ITEM_ID)
    }

    pub fn save_next_event_id(&self, next_id: EventId) -> RepoResult<()> {
        self.kv.save(KEY_NEXT_EVENT_ID, &next_id.to_string())
    }

    pub fn load_next_event_id(&self) -> RepoResult<Option<EventId>> {
        self.load_counter(KEY_NEXT_EVENT_ID)
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> RepoResult<()> {
        let encoded = serde_json::to_string(value)
            .map_err(|err| RepoError::InvalidData(format!("cannot encode `{key}`: {err}")))?;
        self.kv.save(key, &encoded)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> RepoResult<Option<T>> {
        let Some(raw) = self.kv.load(key)? else {
            return Ok(None);
        };
        let decoded = serde_json::from_str(&raw)
            .map_err(|err| RepoError::InvalidData(format!("cannot decode `{key}`: {err}")))?;
        Ok(Some(decoded))
    }

    fn load_counter(&self, key: &str) -> RepoResult<Option<u64>> {
        let Some(raw) = self.kv.load(key)? else {
            return Ok(None);
        };
        let parsed = raw.trim().parse::<u64>().map_err(|err| {
            RepoError::InvalidData(format!("cannot decode `{key}` as integer: {err}"))
        })?;
        Ok(Some(parsed))
    }
}
