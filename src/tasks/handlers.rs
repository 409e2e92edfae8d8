use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use crate::error::TaskloopError;
use crate::models::Task;
use crate::runtime::{Dispatch, EffectRouter};
use crate::source::TasksDataSource;
use crate::ui::{FeedbackView, NavigationRequest, Navigator, Notice};

use super::domain::{TasksListEffect, TasksListEvent};

/// Resolves task-list effects against the stores and the UI.
pub struct TasksListRouter {
    local: Arc<dyn TasksDataSource>,
    remote: Arc<dyn TasksDataSource>,
    feedback: Arc<dyn FeedbackView>,
    navigator: Arc<dyn Navigator>,
}

impl TasksListRouter {
    pub fn new(
        local: Arc<dyn TasksDataSource>,
        remote: Arc<dyn TasksDataSource>,
        feedback: Arc<dyn FeedbackView>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            local,
            remote,
            feedback,
            navigator,
        }
    }
}

impl EffectRouter<TasksListEffect, TasksListEvent> for TasksListRouter {
    fn route(&self, effect: TasksListEffect) -> Dispatch<TasksListEvent> {
        match effect {
            TasksListEffect::RefreshTasks => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                Dispatch::transformer(stream::once(async move {
                    match refresh(local.as_ref(), remote.as_ref()).await {
                        Ok(()) => TasksListEvent::TasksRefreshed,
                        Err(e) => {
                            warn!(error = %e, "refresh failed");
                            TasksListEvent::TasksRefreshFailed
                        }
                    }
                }))
            }
            TasksListEffect::LoadTasks => {
                let local = Arc::clone(&self.local);
                Dispatch::transformer(stream::once(async move {
                    match local.list().await {
                        Ok(tasks) => TasksListEvent::TasksLoaded(tasks),
                        Err(e) => {
                            warn!(error = %e, "loading tasks failed");
                            TasksListEvent::TasksLoadingFailed
                        }
                    }
                }))
            }
            TasksListEffect::SaveTask(task) => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                silent(async move {
                    if let Err(e) = save_everywhere(local.as_ref(), remote.as_ref(), &task).await {
                        warn!(task_id = %task.id, error = %e, "saving task failed");
                    }
                })
            }
            TasksListEffect::DeleteTasks(tasks) => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                silent(async move {
                    for task in &tasks {
                        if let Err(e) = delete_everywhere(local.as_ref(), remote.as_ref(), task).await {
                            warn!(task_id = %task.id, error = %e, "deleting task failed");
                        }
                    }
                })
            }
            TasksListEffect::ShowFeedback(feedback) => {
                let view = Arc::clone(&self.feedback);
                Dispatch::action(move || view.show(Notice::from(feedback)))
            }
            TasksListEffect::NavigateToTaskDetails(task) => {
                let navigator = Arc::clone(&self.navigator);
                Dispatch::action(move || navigator.navigate(NavigationRequest::ShowTaskDetails(task)))
            }
            TasksListEffect::StartTaskCreationFlow => {
                let navigator = Arc::clone(&self.navigator);
                Dispatch::action(move || navigator.navigate(NavigationRequest::StartTaskCreation))
            }
        }
    }
}

/// Runs `work` as a transformer that never yields.
fn silent<F>(work: F) -> Dispatch<TasksListEvent>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    Dispatch::transformer(stream::once(work).filter_map(|()| async { None }))
}

/// Copy every remote task into the local store.
#[instrument(skip_all)]
async fn refresh(
    local: &dyn TasksDataSource,
    remote: &dyn TasksDataSource,
) -> Result<(), TaskloopError> {
    let tasks = remote.list().await?;
    debug!(count = tasks.len(), "fetched remote tasks");
    for task in &tasks {
        local.save(task).await?;
    }
    Ok(())
}

/// Remote first, then local.
pub(crate) async fn save_everywhere(
    local: &dyn TasksDataSource,
    remote: &dyn TasksDataSource,
    task: &Task,
) -> Result<(), TaskloopError> {
    remote.save(task).await?;
    local.save(task).await
}

pub(crate) async fn delete_everywhere(
    local: &dyn TasksDataSource,
    remote: &dyn TasksDataSource,
    task: &Task,
) -> Result<(), TaskloopError> {
    remote.delete(&task.id).await?;
    local.delete(&task.id).await
}
