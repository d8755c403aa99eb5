//! Domain model for the board engine.
//!
//! # Responsibility
//! - Define the canonical container/item/event records shared by all layers.
//! - Carry the fixed board layout (slot ids, display names, roles).
//! - Provide the default dataset used when no persisted state exists.
//!
//! # Invariants
//! - The container-id set is fixed at initialization and never changes.
//! - Item ids and event ids are independent monotonic counters; neither is
//!   ever reused, even after deletion or a log clear.

pub mod container;
pub mod defaults;
pub mod event;
pub mod item;
