use crate::error::TaskloopError;
use crate::models::Task;
use crate::runtime::{Logic, Next};

use super::domain::{TaskDetailEffect, TaskDetailEvent, TaskDetailModel};

type DetailNext = Next<TaskDetailModel, TaskDetailEffect>;

pub struct TaskDetailLogic;

impl Logic for TaskDetailLogic {
    type Model = TaskDetailModel;
    type Event = TaskDetailEvent;
    type Effect = TaskDetailEffect;

    fn update(task: &Task, event: TaskDetailEvent) -> Result<DetailNext, TaskloopError> {
        Ok(update(task, event))
    }
}

pub fn update(task: &Task, event: TaskDetailEvent) -> DetailNext {
    use TaskDetailEffect as Fx;

    match event {
        TaskDetailEvent::DeleteTaskRequested => Next::dispatch(vec![Fx::DeleteTask(task.clone())]),
        TaskDetailEvent::CompleteTaskRequested => {
            if task.is_completed() {
                Next::no_change()
            } else {
                let completed = task.complete();
                Next::next_with(completed.clone(), vec![Fx::SaveTask(completed)])
            }
        }
        TaskDetailEvent::ActivateTaskRequested => {
            if !task.is_completed() {
                Next::no_change()
            } else {
                let activated = task.activate();
                Next::next_with(activated.clone(), vec![Fx::SaveTask(activated)])
            }
        }
        TaskDetailEvent::EditTaskRequested => Next::dispatch(vec![Fx::OpenTaskEditor(task.clone())]),
        TaskDetailEvent::TaskDeleted => Next::dispatch(vec![Fx::Exit]),
        TaskDetailEvent::TaskMarkedComplete => Next::dispatch(vec![Fx::NotifyTaskMarkedComplete]),
        TaskDetailEvent::TaskMarkedActive => Next::dispatch(vec![Fx::NotifyTaskMarkedActive]),
        TaskDetailEvent::TaskSaveFailed => Next::dispatch(vec![Fx::NotifyTaskSaveFailed]),
        TaskDetailEvent::TaskDeletionFailed => Next::dispatch(vec![Fx::NotifyTaskDeletionFailed]),
    }
}
