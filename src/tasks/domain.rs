use serde::{Deserialize, Serialize};

use crate::error::TaskloopError;
use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TasksFilterType {
    #[default]
    AllTasks,
    ActiveTasks,
    CompletedTasks,
}

impl TasksFilterType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AllTasks => "All",
            Self::ActiveTasks => "Active",
            Self::CompletedTasks => "Completed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksListModel {
    #[serde(rename = "model_tasks", default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(rename = "model_loading", default)]
    pub loading: bool,
    #[serde(rename = "model_filter", default)]
    pub filter: TasksFilterType,
}

impl TasksListModel {
    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        Self {
            tasks: Some(tasks),
            ..self
        }
    }

    pub fn with_loading(self, loading: bool) -> Self {
        Self { loading, ..self }
    }

    pub fn with_filter(self, filter: TasksFilterType) -> Self {
        Self { filter, ..self }
    }

    /// Position of the first task with `id` in the unfiltered list.
    pub fn find_task_index_by_id(&self, id: &str) -> Result<(usize, &Task), TaskloopError> {
        let tasks = self
            .tasks
            .as_ref()
            .ok_or_else(TaskloopError::tasks_not_loaded)?;
        tasks
            .iter()
            .enumerate()
            .find(|(_, t)| t.id == id)
            .ok_or_else(|| TaskloopError::task_not_found(id))
    }

    pub fn find_task_by_id(&self, id: &str) -> Result<&Task, TaskloopError> {
        self.find_task_index_by_id(id).map(|(_, task)| task)
    }

    /// Copy of the model with the task at `index` replaced.
    pub fn with_task_at(&self, index: usize, task: Task) -> Result<Self, TaskloopError> {
        let tasks = self
            .tasks
            .as_ref()
            .ok_or_else(TaskloopError::tasks_not_loaded)?;
        if index >= tasks.len() {
            return Err(TaskloopError::task_not_found(&task.id));
        }
        let mut tasks = tasks.clone();
        tasks[index] = task;
        Ok(self.clone().with_tasks(tasks))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksListEvent {
    RefreshRequested,
    NewTaskClicked,
    NavigateToTaskDetailsRequested(String),
    TaskMarkedComplete(String),
    TaskMarkedActive(String),
    ClearCompletedTasksRequested,
    FilterSelected(TasksFilterType),
    TasksLoaded(Vec<Task>),
    TaskCreated,
    TasksRefreshed,
    TasksRefreshFailed,
    TasksLoadingFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    SavedSuccessfully,
    MarkedActive,
    MarkedComplete,
    ClearedCompleted,
    LoadingError,
}

impl FeedbackType {
    pub fn message(&self) -> &'static str {
        match self {
            Self::SavedSuccessfully => "TO-DO saved",
            Self::MarkedActive => "Task marked active",
            Self::MarkedComplete => "Task marked complete",
            Self::ClearedCompleted => "Completed tasks cleared",
            Self::LoadingError => "Error while loading tasks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksListEffect {
    RefreshTasks,
    LoadTasks,
    SaveTask(Task),
    DeleteTasks(Vec<Task>),
    ShowFeedback(FeedbackType),
    NavigateToTaskDetails(Task),
    StartTaskCreationFlow,
}
