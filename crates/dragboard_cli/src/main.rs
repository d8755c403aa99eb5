//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive `dragboard_core` end to end without any UI attached.
//! - Keep output small enough for quick local sanity checks.

use dragboard_core::db::open_db_in_memory;
use dragboard_core::{BoardService, SqliteKvRepository, STAGING_CONTAINER};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Why: an in-memory store keeps the probe side-effect free while still
    // exercising the whole persistence gateway.
    let conn = open_db_in_memory()?;
    let mut board = BoardService::init(SqliteKvRepository::new(&conn));

    let item = board.create_item("Buy milk")?;
    board.move_item(item.id, STAGING_CONTAINER, 5)?;
    board.edit_item(5, item.id, "Buy oat milk")?;
    board.delete_item(5, item.id)?;

    println!("dragboard_core version={}", dragboard_core::core_version());
    println!("audit log (newest first):");
    for event in board.events() {
        println!("  {}", event.text);
    }
    println!("csv export:");
    println!("{}", board.export_csv());

    board.shutdown();
    Ok(())
}
