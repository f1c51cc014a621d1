//! SQL schema constants and connection setup for the SQLite backend.
//!
//! The `agents` table belongs to whoever provisions the database file; this
//! crate only reads and writes rows in it. The `Users` table is owned here
//! and created on startup by [`bootstrap_users`].

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::error::StorageError;
use crate::types::UsersBootstrap;

/// Name of the account seeded into `Users`.
pub const DEFAULT_USER_NAME: &str = "fsladmin";
pub const DEFAULT_USER_EMAIL: &str = "fsladmin@firstsource.com";
pub const DEFAULT_USER_PASSWORD: &str = "fsladmin";

pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS Users (
    name TEXT PRIMARY KEY,
    email TEXT,
    password TEXT
)";

/// Layout of the externally provisioned `agents` table. Only used to build
/// in-memory databases; real files are expected to already contain it.
pub const CREATE_AGENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS agents (
    sr_number INTEGER PRIMARY KEY AUTOINCREMENT,
    agent_name TEXT NOT NULL,
    start_timestamp TEXT,
    stop_timestamp TEXT
)";

/// Flags for opening an existing database file. `SQLITE_OPEN_CREATE` is
/// deliberately absent: a missing file must fail to open.
fn open_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

/// Opens an existing SQLite database at `path` in read-write mode.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    Connection::open_with_flags(path, open_flags()).map_err(|source| StorageError::Open {
        path: path.to_string(),
        source,
    })
}

/// Opens an in-memory database with the `agents` table already in place.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(CREATE_AGENTS_TABLE)?;
    Ok(conn)
}

/// Ensures the `Users` table exists and holds the default account.
///
/// Table creation, the existence check and the insert run in one
/// transaction, so at most one default row can ever be written.
pub fn bootstrap_users(conn: &mut Connection) -> Result<UsersBootstrap, StorageError> {
    let tx = conn.transaction()?;
    tx.execute(CREATE_USERS_TABLE, [])?;

    let existing: Option<String> = tx
        .query_row(
            "SELECT name FROM Users WHERE name = ?1",
            params![DEFAULT_USER_NAME],
            |row| row.get(0),
        )
        .optional()?;

    let seeded = existing.is_none();
    if seeded {
        tx.execute(
            "INSERT INTO Users (name, email, password) VALUES (?1, ?2, ?3)",
            params![DEFAULT_USER_NAME, DEFAULT_USER_EMAIL, DEFAULT_USER_PASSWORD],
        )?;
    }
    tx.commit()?;

    Ok(UsersBootstrap { seeded })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_default_users(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM Users WHERE name = ?1",
            params![DEFAULT_USER_NAME],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn missing_file_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let err = open_database(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StorageError::Open { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn bootstrap_seeds_default_user_once() {
        let mut conn = open_in_memory().unwrap();
        assert!(bootstrap_users(&mut conn).unwrap().seeded);
        assert!(!bootstrap_users(&mut conn).unwrap().seeded);
        assert_eq!(count_default_users(&conn), 1);

        let (email, password): (String, String) = conn
            .query_row(
                "SELECT email, password FROM Users WHERE name = ?1",
                params![DEFAULT_USER_NAME],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(email, DEFAULT_USER_EMAIL);
        assert_eq!(password, DEFAULT_USER_PASSWORD);
    }

    #[test]
    fn bootstrap_is_idempotent_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents_data.db");
        Connection::open(&path).unwrap();
        let path = path.to_str().unwrap();

        for _ in 0..2 {
            let mut conn = open_database(path).unwrap();
            bootstrap_users(&mut conn).unwrap();
        }

        let conn = open_database(path).unwrap();
        assert_eq!(count_default_users(&conn), 1);
    }

    #[test]
    fn bootstrap_keeps_existing_default_row() {
        let mut conn = open_in_memory().unwrap();
        conn.execute_batch(CREATE_USERS_TABLE).unwrap();
        conn.execute(
            "INSERT INTO Users (name, email, password) VALUES (?1, 'other@example.com', 'x')",
            params![DEFAULT_USER_NAME],
        )
        .unwrap();

        assert!(!bootstrap_users(&mut conn).unwrap().seeded);
        let email: String = conn
            .query_row("SELECT email FROM Users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(email, "other@example.com");
    }
}
