//! [`AgentStore`]: the single SQLite connection behind the agents API.
//!
//! Every method issues its statement(s) exactly once and hands SQLite's
//! error back unchanged. No method imposes an ordering that the underlying
//! query does not already have.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

use crate::error::StorageError;
use crate::types::{AgentMaxSerial, AgentRecord, CreatedAgent, DeletedAgents, UsersBootstrap};

/// Owns the process-wide connection to the agents database.
pub struct AgentStore {
    conn: Connection,
}

impl AgentStore {
    /// Opens an existing database file at `path`. Fails if the file is
    /// missing or not writable.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(AgentStore { conn })
    }

    /// Opens an in-memory database with an empty `agents` table (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(AgentStore { conn })
    }

    /// Creates the `Users` table and default account if absent.
    pub fn bootstrap_users(&mut self) -> Result<UsersBootstrap, StorageError> {
        crate::schema::bootstrap_users(&mut self.conn)
    }

    /// Returns every row of `agents` in storage order.
    pub fn list_agents(&self) -> Result<Vec<AgentRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT sr_number, agent_name, start_timestamp, stop_timestamp FROM agents",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(AgentRecord {
                sr_number: row.get(0)?,
                agent_name: row.get(1)?,
                start_timestamp: timestamp_column(row, 2)?,
                stop_timestamp: timestamp_column(row, 3)?,
            })
        })?;

        let mut agents = Vec::new();
        for row in rows {
            agents.push(row?);
        }
        Ok(agents)
    }

    /// Groups rows by `agent_name` and returns the highest serial per name.
    pub fn list_max_serials(&self) -> Result<Vec<AgentMaxSerial>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT agent_name, MAX(sr_number) AS max_sr_number FROM agents GROUP BY agent_name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(AgentMaxSerial {
                agent_name: row.get(0)?,
                max_sr_number: row.get(1)?,
            })
        })?;

        let mut groups = Vec::new();
        for row in rows {
            groups.push(row?);
        }
        Ok(groups)
    }

    /// Inserts a row stamped with SQLite's current time and returns the
    /// serial SQLite assigned to it.
    pub fn create_agent(&self, agent_name: &str) -> Result<CreatedAgent, StorageError> {
        self.conn.execute(
            "INSERT INTO agents (agent_name, start_timestamp) VALUES (?1, datetime('now'))",
            params![agent_name],
        )?;
        Ok(CreatedAgent {
            sr_number: self.conn.last_insert_rowid(),
            agent_name: agent_name.to_string(),
        })
    }

    /// Deletes every row whose name equals `agent_name`.
    pub fn delete_agents(&self, agent_name: &str) -> Result<DeletedAgents, StorageError> {
        let changes = self
            .conn
            .execute("DELETE FROM agents WHERE agent_name = ?1", params![agent_name])?;
        Ok(DeletedAgents {
            agent_name: agent_name.to_string(),
            changes,
        })
    }
}

/// Reads a timestamp column whatever storage class SQLite gave it.
fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    })
}
