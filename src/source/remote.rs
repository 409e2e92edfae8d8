use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::TaskloopError;
use crate::models::{Task, TaskDetails};

use super::TasksDataSource;

/// Stand-in for a backend: an in-process store whose reads are artificially delayed.
pub struct TasksRemoteDataSource {
    latency: Duration,
    tasks: RwLock<Vec<Task>>,
}

impl TasksRemoteDataSource {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            tasks: RwLock::new(Vec::new()),
        }
    }

    pub fn with_tasks(latency: Duration, tasks: Vec<Task>) -> Self {
        Self {
            latency,
            tasks: RwLock::new(tasks),
        }
    }

    /// Pre-populated with the two demo tasks the service ships with.
    pub fn seeded(latency: Duration) -> Self {
        Self::with_tasks(latency, demo_tasks())
    }

    /// Current contents, without the artificial delay.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "1234",
            TaskDetails::new(
                "Build tower in Pisa",
                "Ground looks good, no foundation work required.",
            ),
        ),
        Task::new(
            "4321",
            TaskDetails::new(
                "Finish bridge in Tacoma",
                "Found awesome girders at half the cost!",
            ),
        ),
    ]
}

#[async_trait]
impl TasksDataSource for TasksRemoteDataSource {
    async fn list(&self) -> Result<Vec<Task>, TaskloopError> {
        self.simulate_latency().await;
        let tasks = self.tasks.read().clone();
        debug!(count = tasks.len(), "remote returned tasks");
        Ok(tasks)
    }

    async fn get(&self, id: &str) -> Result<Option<Task>, TaskloopError> {
        self.simulate_latency().await;
        Ok(self.tasks.read().iter().find(|t| t.id == id).cloned())
    }

    async fn save(&self, task: &Task) -> Result<(), TaskloopError> {
        let mut tasks = self.tasks.write();
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task.clone(),
            None => tasks.push(task.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), TaskloopError> {
        self.tasks.write().retain(|t| t.id != id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), TaskloopError> {
        self.tasks.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_with_demo_tasks() {
        let remote = TasksRemoteDataSource::seeded(Duration::ZERO);
        let ids: Vec<_> = remote.list().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1234", "4321"]);
    }

    #[tokio::test]
    async fn save_replaces_in_place() {
        let remote = TasksRemoteDataSource::seeded(Duration::ZERO);
        let done = remote.get("1234").await.unwrap().unwrap().complete();
        remote.save(&done).await.unwrap();
        let tasks = remote.list().await.unwrap();
        assert_eq!(tasks[0], done);
        assert_eq!(tasks.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reads_are_delayed() {
        let remote = TasksRemoteDataSource::seeded(Duration::from_secs(3));
        let start = tokio::time::Instant::now();
        let _ = remote.list().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test]
    async fn delete_and_clear() {
        let remote = TasksRemoteDataSource::seeded(Duration::ZERO);
        remote.delete("1234").await.unwrap();
        assert_eq!(remote.get("1234").await.unwrap(), None);
        remote.delete_all().await.unwrap();
        assert!(remote.snapshot().is_empty());
    }
}
