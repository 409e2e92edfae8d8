use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::db::{connection, task_repo};
use crate::error::TaskloopError;
use crate::models::Task;

use super::TasksDataSource;

/// SQLite-backed source of truth on this machine.
pub struct TasksLocalDataSource {
    conn: Arc<Mutex<Connection>>,
}

impl TasksLocalDataSource {
    pub fn open(path: &Path) -> Result<Self, TaskloopError> {
        Ok(Self::from_connection(connection::open_db(path)?))
    }

    pub fn in_memory() -> Result<Self, TaskloopError> {
        Ok(Self::from_connection(connection::open_in_memory()?))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking pool; rusqlite calls never run on a
    /// runtime worker.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, TaskloopError>
    where
        F: FnOnce(&Connection) -> Result<T, TaskloopError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || f(&conn.lock()))
            .await
            .map_err(|e| TaskloopError::database(format!("Storage task join error: {e}")))?
    }
}

#[async_trait]
impl TasksDataSource for TasksLocalDataSource {
    async fn list(&self) -> Result<Vec<Task>, TaskloopError> {
        self.with_conn(task_repo::list_tasks).await
    }

    async fn get(&self, id: &str) -> Result<Option<Task>, TaskloopError> {
        let id = id.to_string();
        self.with_conn(move |conn| task_repo::get_task(conn, &id)).await
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    async fn save(&self, task: &Task) -> Result<(), TaskloopError> {
        let task = task.clone();
        self.with_conn(move |conn| task_repo::save_task(conn, &task))
            .await?;
        debug!("saved task locally");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), TaskloopError> {
        let id = id.to_string();
        let removed = self
            .with_conn(move |conn| task_repo::delete_task(conn, &id))
            .await?;
        debug!(removed, "deleted task locally");
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), TaskloopError> {
        let removed = self.with_conn(task_repo::delete_all_tasks).await?;
        debug!(removed, "cleared local tasks");
        Ok(())
    }
}
