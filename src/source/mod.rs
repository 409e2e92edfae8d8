//! Storage collaborators. Local and remote stores share one interface.

pub mod local;
pub mod remote;

use async_trait::async_trait;

use crate::error::TaskloopError;
use crate::models::Task;

pub use local::TasksLocalDataSource;
pub use remote::TasksRemoteDataSource;

/// Every call is atomic on its own; callers never get multi-operation transactions.
#[async_trait]
pub trait TasksDataSource: Send + Sync {
    /// All tasks, read in full.
    async fn list(&self) -> Result<Vec<Task>, TaskloopError>;

    async fn get(&self, id: &str) -> Result<Option<Task>, TaskloopError>;

    /// Insert or replace by id.
    async fn save(&self, task: &Task) -> Result<(), TaskloopError>;

    async fn delete(&self, id: &str) -> Result<(), TaskloopError>;

    async fn delete_all(&self) -> Result<(), TaskloopError>;
}
