use std::sync::Arc;

use tracing::{info, warn};

use crate::error::TaskloopError;
use crate::models::{Task, TaskDetails};
use crate::runtime::{Dispatch, EffectRouter};
use crate::source::TasksDataSource;
use crate::tasks::handlers::save_everywhere;
use crate::ui::{FeedbackView, NavigationRequest, Navigator, Notice};

use super::domain::{AddEditTaskEffect, AddEditTaskEvent};

pub struct AddEditTaskRouter {
    local: Arc<dyn TasksDataSource>,
    remote: Arc<dyn TasksDataSource>,
    feedback: Arc<dyn FeedbackView>,
    navigator: Arc<dyn Navigator>,
}

impl AddEditTaskRouter {
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

impl EffectRouter<AddEditTaskEffect, AddEditTaskEvent> for AddEditTaskRouter {
    fn route(&self, effect: AddEditTaskEffect) -> Dispatch<AddEditTaskEvent> {
        match effect {
            AddEditTaskEffect::NotifyEmptyTaskNotAllowed => {
                let view = Arc::clone(&self.feedback);
                Dispatch::action(move || view.show(Notice::EmptyTaskNotAllowed))
            }
            AddEditTaskEffect::Exit { successful } => {
                let navigator = Arc::clone(&self.navigator);
                Dispatch::action(move || navigator.navigate(NavigationRequest::Exit { successful }))
            }
            AddEditTaskEffect::CreateTask(details) => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                let view = Arc::clone(&self.feedback);
                Dispatch::function(async move {
                    match create(local.as_ref(), remote.as_ref(), details).await {
                        Ok(task) => {
                            info!(task_id = %task.id, "task created");
                            AddEditTaskEvent::TaskCreatedSuccessfully
                        }
                        Err(e) => {
                            warn!(error = %e, "creating task failed");
                            view.report_failure(&e);
                            AddEditTaskEvent::TaskCreationFailed(e.message)
                        }
                    }
                })
            }
            AddEditTaskEffect::SaveTask(task) => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                let view = Arc::clone(&self.feedback);
                Dispatch::function(async move {
                    match save_everywhere(local.as_ref(), remote.as_ref(), &task).await {
                        Ok(()) => AddEditTaskEvent::TaskUpdatedSuccessfully,
                        Err(e) => {
                            warn!(task_id = %task.id, error = %e, "updating task failed");
                            view.report_failure(&e);
                            AddEditTaskEvent::TaskUpdateFailed(e.message)
                        }
                    }
                })
            }
        }
    }
}

/// Assigns a fresh id and stores the task. An id already known to either store is refused
/// before anything is written.
async fn create(
    local: &dyn TasksDataSource,
    remote: &dyn TasksDataSource,
    details: TaskDetails,
) -> Result<Task, TaskloopError> {
    let task = Task::with_generated_id(details);
    if local.get(&task.id).await?.is_some() || remote.get(&task.id).await?.is_some() {
        return Err(TaskloopError::duplicate_task_id(&task.id));
    }
    save_everywhere(local, remote, &task).await?;
    Ok(task)
}
