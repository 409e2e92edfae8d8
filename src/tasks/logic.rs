use crate::error::TaskloopError;
use crate::models::Task;
use crate::runtime::{First, Logic, Next};

use super::domain::{FeedbackType, TasksListEffect, TasksListEvent, TasksListModel};

type TasksNext = Next<TasksListModel, TasksListEffect>;

pub struct TasksListLogic;

impl Logic for TasksListLogic {
    type Model = TasksListModel;
    type Event = TasksListEvent;
    type Effect = TasksListEffect;

    fn init(model: TasksListModel) -> First<TasksListModel, TasksListEffect> {
        init(model)
    }

    fn update(model: &TasksListModel, event: TasksListEvent) -> Result<TasksNext, TaskloopError> {
        update(model, event)
    }
}

/// A restored model already has tasks, but is still re-read from the local store.
pub fn init(model: TasksListModel) -> First<TasksListModel, TasksListEffect> {
    if model.tasks.is_some() {
        First::first_with(model, vec![TasksListEffect::LoadTasks])
    } else {
        First::first_with(
            model.with_loading(true),
            vec![TasksListEffect::RefreshTasks, TasksListEffect::LoadTasks],
        )
    }
}

pub fn update(model: &TasksListModel, event: TasksListEvent) -> Result<TasksNext, TaskloopError> {
    use TasksListEvent::*;

    Ok(match event {
        RefreshRequested => Next::next_with(
            model.clone().with_loading(true),
            vec![TasksListEffect::RefreshTasks],
        ),
        NewTaskClicked => Next::dispatch(vec![TasksListEffect::StartTaskCreationFlow]),
        NavigateToTaskDetailsRequested(id) => {
            let task = model.find_task_by_id(&id)?;
            Next::dispatch(vec![TasksListEffect::NavigateToTaskDetails(task.clone())])
        }
        TaskMarkedComplete(id) => {
            let (index, task) = model.find_task_index_by_id(&id)?;
            let updated = task.complete();
            update_task(model, index, updated, FeedbackType::MarkedComplete)?
        }
        TaskMarkedActive(id) => {
            let (index, task) = model.find_task_index_by_id(&id)?;
            let updated = task.activate();
            update_task(model, index, updated, FeedbackType::MarkedActive)?
        }
        ClearCompletedTasksRequested => on_clear_completed(model),
        FilterSelected(filter) => Next::next(model.clone().with_filter(filter)),
        TasksLoaded(tasks) => {
            if model.loading && tasks.is_empty() {
                Next::no_change()
            } else if model.tasks.as_ref() == Some(&tasks) {
                Next::no_change()
            } else {
                Next::next(model.clone().with_tasks(tasks))
            }
        }
        TaskCreated => Next::dispatch(vec![TasksListEffect::ShowFeedback(
            FeedbackType::SavedSuccessfully,
        )]),
        TasksRefreshed => Next::next_with(
            model.clone().with_loading(false),
            vec![TasksListEffect::LoadTasks],
        ),
        TasksRefreshFailed | TasksLoadingFailed => Next::next_with(
            model.clone().with_loading(false),
            vec![TasksListEffect::ShowFeedback(FeedbackType::LoadingError)],
        ),
    })
}

fn update_task(
    model: &TasksListModel,
    index: usize,
    task: Task,
    feedback: FeedbackType,
) -> Result<TasksNext, TaskloopError> {
    let next_model = model.with_task_at(index, task.clone())?;
    Ok(Next::next_with(
        next_model,
        vec![
            TasksListEffect::SaveTask(task),
            TasksListEffect::ShowFeedback(feedback),
        ],
    ))
}

fn on_clear_completed(model: &TasksListModel) -> TasksNext {
    let Some(tasks) = &model.tasks else {
        return Next::no_change();
    };
    let (completed, remaining): (Vec<_>, Vec<_>) =
        tasks.iter().cloned().partition(|t| t.is_completed());
    if completed.is_empty() {
        return Next::no_change();
    }
    Next::next_with(
        model.clone().with_tasks(remaining),
        vec![
            TasksListEffect::DeleteTasks(completed),
            TasksListEffect::ShowFeedback(FeedbackType::ClearedCompleted),
        ],
    )
}
