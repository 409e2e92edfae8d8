use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::TaskloopError;

use super::migrations;

/// Open an existing database. Returns error if `init` has not created it yet.
pub fn open_db(path: &Path) -> Result<Connection, TaskloopError> {
    if !path.exists() {
        return Err(TaskloopError::not_initialized());
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create directories and database, then run migrations. Safe to repeat.
pub fn init_db(path: &Path) -> Result<(), TaskloopError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TaskloopError::database(e.to_string()))?;
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(())
}

/// Migrated in-memory database, used by tests.
pub fn open_in_memory() -> Result<Connection, TaskloopError> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), TaskloopError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
