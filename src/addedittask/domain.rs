use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskDetails};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "task_id", rename_all = "snake_case")]
pub enum AddEditTaskMode {
    Create,
    Update(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddEditTaskModel {
    pub mode: AddEditTaskMode,
    #[serde(default)]
    pub details: TaskDetails,
}

impl AddEditTaskModel {
    pub fn create() -> Self {
        Self {
            mode: AddEditTaskMode::Create,
            details: TaskDetails::default(),
        }
    }

    /// Form pre-filled from an existing task.
    pub fn update(task: &Task) -> Self {
        Self {
            mode: AddEditTaskMode::Update(task.id.clone()),
            details: task.details.clone(),
        }
    }

    pub fn with_details(self, details: TaskDetails) -> Self {
        Self { details, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEditTaskEvent {
    TaskDefinitionCompleted { title: String, description: String },
    TaskCreatedSuccessfully,
    TaskCreationFailed(String),
    TaskUpdatedSuccessfully,
    TaskUpdateFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEditTaskEffect {
    NotifyEmptyTaskNotAllowed,
    CreateTask(TaskDetails),
    SaveTask(Task),
    Exit { successful: bool },
}
