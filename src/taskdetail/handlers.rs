use std::sync::Arc;

use tracing::warn;

use crate::runtime::{Dispatch, EffectRouter};
use crate::source::TasksDataSource;
use crate::tasks::handlers::{delete_everywhere, save_everywhere};
use crate::ui::{FeedbackView, NavigationRequest, Navigator, Notice};

use super::domain::{TaskDetailEffect, TaskDetailEvent};

pub struct TaskDetailRouter {
    local: Arc<dyn TasksDataSource>,
    remote: Arc<dyn TasksDataSource>,
    feedback: Arc<dyn FeedbackView>,
    navigator: Arc<dyn Navigator>,
}

impl TaskDetailRouter {
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

    fn notify(&self, notice: Notice) -> Dispatch<TaskDetailEvent> {
        let view = Arc::clone(&self.feedback);
        Dispatch::action(move || view.show(notice))
    }

    fn navigate(&self, request: NavigationRequest) -> Dispatch<TaskDetailEvent> {
        let navigator = Arc::clone(&self.navigator);
        Dispatch::action(move || navigator.navigate(request))
    }
}

impl EffectRouter<TaskDetailEffect, TaskDetailEvent> for TaskDetailRouter {
    fn route(&self, effect: TaskDetailEffect) -> Dispatch<TaskDetailEvent> {
        match effect {
            TaskDetailEffect::DeleteTask(task) => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                let view = Arc::clone(&self.feedback);
                Dispatch::function(async move {
                    match delete_everywhere(local.as_ref(), remote.as_ref(), &task).await {
                        Ok(()) => TaskDetailEvent::TaskDeleted,
                        Err(e) => {
                            warn!(task_id = %task.id, error = %e, "deleting task failed");
                            view.report_failure(&e);
                            TaskDetailEvent::TaskDeletionFailed
                        }
                    }
                })
            }
            TaskDetailEffect::SaveTask(task) => {
                let local = Arc::clone(&self.local);
                let remote = Arc::clone(&self.remote);
                let view = Arc::clone(&self.feedback);
                Dispatch::function(async move {
                    match save_everywhere(local.as_ref(), remote.as_ref(), &task).await {
                        Ok(()) if task.is_completed() => TaskDetailEvent::TaskMarkedComplete,
                        Ok(()) => TaskDetailEvent::TaskMarkedActive,
                        Err(e) => {
                            warn!(task_id = %task.id, error = %e, "saving task failed");
                            view.report_failure(&e);
                            TaskDetailEvent::TaskSaveFailed
                        }
                    }
                })
            }
            TaskDetailEffect::NotifyTaskMarkedComplete => self.notify(Notice::MarkedComplete),
            TaskDetailEffect::NotifyTaskMarkedActive => self.notify(Notice::MarkedActive),
            TaskDetailEffect::NotifyTaskSaveFailed => self.notify(Notice::TaskSaveFailed),
            TaskDetailEffect::NotifyTaskDeletionFailed => self.notify(Notice::TaskDeletionFailed),
            TaskDetailEffect::OpenTaskEditor(task) => {
                self.navigate(NavigationRequest::OpenTaskEditor(task))
            }
            TaskDetailEffect::Exit => self.navigate(NavigationRequest::Exit { successful: true }),
        }
    }
}
