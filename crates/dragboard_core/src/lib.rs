//! Core state engine for the Dragboard interactive board.
//! This crate is the single source of truth for business invariants; UI
//! layers only read snapshots and submit intents.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod recorder;
pub mod repo;
pub mod service;
pub mod store;

pub use export::events_to_csv;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::container::{
    container_name, container_role, Container, ContainerId, ContainerRole, EVENT_LOG_CONTAINER,
    EXPORT_CONTAINER, LAYOUT, STAGING_CONTAINER,
};
pub use model::event::{AuditEvent, EventId, EventKind};
pub use model::item::{Item, ItemId};
pub use recorder::EventRecorder;
pub use repo::board_repo::BoardRepository;
pub use repo::kv_repo::{KvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use service::board_service::{BoardService, BoardServiceError};
pub use store::{EntityStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
