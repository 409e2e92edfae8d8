use rusqlite::Connection;

use crate::error::TaskloopError;

pub fn run_migrations(conn: &Connection) -> Result<(), TaskloopError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS tasks (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            entryid TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            completed INTEGER NOT NULL DEFAULT 0
                CHECK (completed IN (0, 1))
        );
        ",
    )?;
    Ok(())
}
