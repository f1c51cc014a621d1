//! Storage error types for agentreg-storage.
//!
//! [`StorageError`] separates the one failure that happens before a
//! connection exists (opening the database file) from every failure that
//! SQLite reports afterwards. Both display the underlying SQLite message
//! unchanged so callers can pass it through to clients.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened. The file is never created,
    /// so a missing path lands here.
    #[error("{source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed against an open connection.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}
