use dragboard_core::db::open_db_in_memory;
use dragboard_core::{
    BoardService, BoardServiceError, EventKind, SqliteKvRepository, EVENT_LOG_CONTAINER,
    EXPORT_CONTAINER, STAGING_CONTAINER,
};
use rusqlite::Connection;

fn fresh_board(conn: &Connection) -> BoardService<SqliteKvRepository<'_>> {
    BoardService::init(SqliteKvRepository::new(conn))
}

fn containers_holding(board: &BoardService<SqliteKvRepository<'_>>, item_id: u64) -> Vec<u32> {
    board
        .containers()
        .into_iter()
        .filter(|container| {
            container.id != EVENT_LOG_CONTAINER
                && container.items.iter().any(|item| item.id == item_id)
        })
        .map(|container| container.id)
        .collect()
}

#[test]
fn move_transfers_ownership_and_names_both_containers() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);
    let events_before = board.events().len();

    // Seeded item 1 starts in container 3 ("Peterborough").
    board.move_item(1, 3, 5).unwrap();

    assert_eq!(containers_holding(&board, 1), vec![5]);

    let events = board.events();
    assert_eq!(events.len(), events_before + 1);
    assert_eq!(events[0].kind, EventKind::Move);
    assert!(events[0].text.starts_with(
        "ID: 1 \"Text box 1\" moved from \"Peterborough\" \u{2192} \"Bedford\" on: "
    ));
}

#[test]
fn move_keeps_the_item_id_stable() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    let item = board.create_item("Buy milk").unwrap();
    board.move_item(item.id, STAGING_CONTAINER, 5).unwrap();

    let containers = board.containers();
    let bedford = containers.iter().find(|c| c.id == 5).unwrap();
    let moved = bedford.items.iter().find(|i| i.id == item.id).unwrap();
    assert_eq!(moved.text, "Buy milk");
    assert_eq!(moved.created_at, item.created_at);
}

#[test]
fn move_to_same_container_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);
    let events_before = board.events().len();

    board.move_item(1, 3, 3).unwrap();

    assert_eq!(containers_holding(&board, 1), vec![3]);
    assert_eq!(board.events().len(), events_before);
}

#[test]
fn non_droppable_targets_reject_the_drop_without_event() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);
    let events_before = board.events().len();

    // Decorative panel and event-log mirror both refuse drops.
    board.move_item(1, 3, 1).unwrap();
    board.move_item(1, 3, EVENT_LOG_CONTAINER).unwrap();

    assert_eq!(containers_holding(&board, 1), vec![3]);
    assert_eq!(board.events().len(), events_before);
}

#[test]
fn export_slot_accepts_drops() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    board.move_item(1, 3, EXPORT_CONTAINER).unwrap();
    assert_eq!(containers_holding(&board, 1), vec![EXPORT_CONTAINER]);
}

#[test]
fn move_retry_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    board.move_item(1, 3, 5).unwrap();
    let events_after_first = board.events().len();

    // Same intent again: the item already sits in the target.
    board.move_item(1, 3, 5).unwrap();

    assert_eq!(containers_holding(&board, 1), vec![5]);
    assert_eq!(board.events().len(), events_after_first);

    let containers = board.containers();
    let bedford = containers.iter().find(|c| c.id == 5).unwrap();
    assert_eq!(
        bedford.items.iter().filter(|item| item.id == 1).count(),
        1,
        "retried move must not duplicate the item"
    );
}

#[test]
fn move_of_a_vanished_item_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    let err = board.move_item(99, 3, 5).unwrap_err();
    assert!(matches!(
        err,
        BoardServiceError::ItemNotFound {
            container_id: 3,
            item_id: 99
        }
    ));
}

#[test]
fn move_with_unknown_container_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    let err = board.move_item(1, 3, 42).unwrap_err();
    assert!(matches!(err, BoardServiceError::ContainerNotFound(42)));

    let err = board.move_item(1, 42, 5).unwrap_err();
    assert!(matches!(err, BoardServiceError::ContainerNotFound(42)));
}

#[test]
fn full_item_lifecycle_scenario() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);
    let events_at_start = board.events().len();

    // Create in staging.
    let item = board.create_item("Buy milk").unwrap();
    assert_eq!(containers_holding(&board, item.id), vec![STAGING_CONTAINER]);
    assert_eq!(board.events().len(), events_at_start + 1);

    // Move staging -> Bedford.
    board.move_item(item.id, STAGING_CONTAINER, 5).unwrap();
    assert_eq!(containers_holding(&board, item.id), vec![5]);
    let events = board.events();
    assert_eq!(events.len(), events_at_start + 2);
    assert!(events[0]
        .text
        .contains("moved from \"Type pantsy\" \u{2192} \"Bedford\""));

    // Delete from Bedford.
    board.delete_item(5, item.id).unwrap();
    assert!(containers_holding(&board, item.id).is_empty());
    let events = board.events();
    assert_eq!(events.len(), events_at_start + 3);
    assert!(events[0].text.starts_with(&format!(
        "ID: {} \"Buy milk\" deleted on: ",
        item.id
    )));
}
