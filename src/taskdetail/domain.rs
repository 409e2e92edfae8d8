use crate::models::Task;

pub type TaskDetailModel = Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailEvent {
    DeleteTaskRequested,
    CompleteTaskRequested,
    ActivateTaskRequested,
    EditTaskRequested,
    TaskDeleted,
    TaskMarkedComplete,
    TaskMarkedActive,
    TaskSaveFailed,
    TaskDeletionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailEffect {
    DeleteTask(Task),
    SaveTask(Task),
    NotifyTaskMarkedComplete,
    NotifyTaskMarkedActive,
    NotifyTaskSaveFailed,
    NotifyTaskDeletionFailed,
    OpenTaskEditor(Task),
    Exit,
}
