//! Mutation engine: the only legal entry points for changing board state.
//!
//! # Responsibility
//! - Orchestrate recorder and store updates into atomic transactions.
//! - Keep UI layers decoupled from storage and rendering details.

pub mod board_service;
