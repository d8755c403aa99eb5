//! Key-value store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide `save`/`load` over a flat, string-keyed durable store.
//! - Keep SQL details inside the persistence boundary.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error for key-value access and record decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A persisted value exists but cannot be decoded as its record type.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted value: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable flat key-value store scoped to one board instance.
pub trait KvRepository {
    /// Writes or overwrites one key.
    fn save(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Reads one key; `Ok(None)` when the key was never written.
    fn load(&self, key: &str) -> RepoResult<Option<String>>;
}

/// SQLite-backed key-value store over the `kv_store` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn save(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, SqliteKvRepository};
    use crate::db::open_db_in_memory;

    #[test]
    fn save_then_load_round_trips() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvRepository::new(&conn);

        kv.save("nextId", "7").unwrap();
        assert_eq!(kv.load("nextId").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn save_overwrites_existing_key() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvRepository::new(&conn);

        kv.save("nextId", "7").unwrap();
        kv.save("nextId", "8").unwrap();
        assert_eq!(kv.load("nextId").unwrap().as_deref(), Some("8"));
    }

    #[test]
    fn missing_key_loads_as_none() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvRepository::new(&conn);
        assert_eq!(kv.load("absent").unwrap(), None);
    }
}
