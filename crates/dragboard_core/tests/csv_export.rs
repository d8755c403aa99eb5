use dragboard_core::db::open_db_in_memory;
use dragboard_core::{BoardService, SqliteKvRepository};
use rusqlite::Connection;

fn fresh_board(conn: &Connection) -> BoardService<SqliteKvRepository<'_>> {
    BoardService::init(SqliteKvRepository::new(conn))
}

#[test]
fn export_renders_header_and_one_row_per_event() {
    let conn = open_db_in_memory().unwrap();
    let board = fresh_board(&conn);

    let csv = board.export_csv();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "ID,Event,Created At,Type");
    assert_eq!(lines.len(), 1 + board.events().len());
    assert!(!csv.ends_with('\n'));

    // Newest event first, matching the log order.
    assert!(lines[1].starts_with("5,\"ID: 6 \"\"Text box 6\"\" created\","));
    assert!(lines[1].ends_with(",create"));
}

#[test]
fn export_escapes_embedded_quotes_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    board.create_item("Said \"hi\"").unwrap();

    let csv = board.export_csv();
    // The event line reads `... "Said "hi"" created ...`; doubling every
    // quote in the CSV field yields `""Said ""hi""""`.
    assert!(csv.contains("\"\"Said \"\"hi\"\"\"\""));
}

#[test]
fn export_reflects_a_cleared_log() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    board.clear_event_log(true).unwrap();
    assert_eq!(board.export_csv(), "ID,Event,Created At,Type");
}

#[test]
fn export_kind_column_uses_lowercase_labels() {
    let conn = open_db_in_memory().unwrap();
    let mut board = fresh_board(&conn);

    board.clear_event_log(true).unwrap();
    board.create_item("labelled").unwrap();
    board.delete_item(2, 7).unwrap();

    let csv = board.export_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].ends_with(",delete"));
    assert!(lines[2].ends_with(",create"));
}
