use std::fs;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::TaskloopError;
use crate::models::Task;
use crate::runtime::{Controller, Logic};
use crate::source::remote::demo_tasks;
use crate::source::{TasksDataSource, TasksLocalDataSource, TasksRemoteDataSource};
use crate::ui::{FeedbackView, Navigator, Outbox};

/// Everything a command needs to run one screen: stores, the UI outbox and the tokio runtime.
pub struct AppContext {
    pub config: Config,
    pub local: Arc<TasksLocalDataSource>,
    pub remote: Arc<TasksRemoteDataSource>,
    pub outbox: Outbox,
    runtime: tokio::runtime::Runtime,
}

impl AppContext {
    pub fn open() -> Result<Self, TaskloopError> {
        let config = Config::load()?;
        let local = Arc::new(TasksLocalDataSource::open(&config.db_path())?);
        let remote = Arc::new(load_remote(&config)?);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| TaskloopError::config(format!("Cannot start runtime: {e}")))?;
        debug!(data_dir = %config.data_dir.display(), "context opened");
        Ok(Self {
            config,
            local,
            remote,
            outbox: Outbox::new(),
            runtime,
        })
    }

    pub fn local(&self) -> Arc<dyn TasksDataSource> {
        self.local.clone()
    }

    pub fn remote(&self) -> Arc<dyn TasksDataSource> {
        self.remote.clone()
    }

    pub fn feedback(&self) -> Arc<dyn FeedbackView> {
        Arc::new(self.outbox.clone())
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::new(self.outbox.clone())
    }

    pub fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }

    pub fn find_task(&self, id: &str) -> Result<Task, TaskloopError> {
        self.block_on(self.local.get(id))?
            .ok_or_else(|| TaskloopError::task_not_found(id))
    }

    /// Start a screen, wait for its init effects, feed `events` in order, then stop it.
    /// The first invariant violation reported by the loop is returned as the error.
    pub fn run_screen<L: Logic>(
        &self,
        controller: &mut Controller<L>,
        events: Vec<L::Event>,
    ) -> Result<(), TaskloopError> {
        self.block_on(drive(controller, events))
    }

    /// Write the simulated remote back so the next process sees the same backend.
    pub fn persist_remote(&self) -> Result<(), TaskloopError> {
        let body = serde_json::to_string_pretty(&self.remote.snapshot())?;
        let path = self.config.remote_path();
        fs::write(&path, body)
            .map_err(|e| TaskloopError::remote(format!("Cannot write {}: {e}", path.display())))
    }
}

async fn drive<L: Logic>(
    controller: &mut Controller<L>,
    events: Vec<L::Event>,
) -> Result<(), TaskloopError> {
    controller.start()?;
    controller.settle().await;
    for event in events {
        controller.dispatch_event(event)?;
        controller.settle().await;
    }
    let errors = controller.take_errors();
    controller.stop().await;
    match errors.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn load_remote(config: &Config) -> Result<TasksRemoteDataSource, TaskloopError> {
    let latency = config.remote_latency();
    let path = config.remote_path();
    if !path.exists() {
        let tasks = if config.settings.seed_remote {
            demo_tasks()
        } else {
            Vec::new()
        };
        info!(count = tasks.len(), "starting remote from seed");
        return Ok(TasksRemoteDataSource::with_tasks(latency, tasks));
    }
    let raw = fs::read_to_string(&path)
        .map_err(|e| TaskloopError::remote(format!("Cannot read {}: {e}", path.display())))?;
    let tasks: Vec<Task> = serde_json::from_str(&raw)
        .map_err(|e| TaskloopError::remote(format!("Invalid {}: {e}", path.display())))?;
    Ok(TasksRemoteDataSource::with_tasks(latency, tasks))
}
