//! Projection of the list model into what a renderer draws.

use serde::Serialize;

use crate::models::Task;

use super::domain::{TasksFilterType, TasksListModel};
use super::filter::filter_tasks;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskViewData {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyTasksViewData {
    pub message: &'static str,
    pub show_add_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    AwaitingTasks,
    EmptyTasks(EmptyTasksViewData),
    HasTasks { tasks: Vec<TaskViewData> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TasksListViewData {
    pub loading: bool,
    pub filter_label: &'static str,
    pub view_state: ViewState,
}

pub fn tasks_list_view_data(model: &TasksListModel) -> TasksListViewData {
    let view_state = match &model.tasks {
        None => ViewState::AwaitingTasks,
        Some(tasks) => {
            let visible = filter_tasks(tasks, model.filter);
            if visible.is_empty() {
                ViewState::EmptyTasks(empty_tasks_view(model.filter))
            } else {
                ViewState::HasTasks {
                    tasks: visible.iter().map(task_view_data).collect(),
                }
            }
        }
    };
    TasksListViewData {
        loading: model.loading,
        filter_label: model.filter.label(),
        view_state,
    }
}

pub fn task_view_data(task: &Task) -> TaskViewData {
    TaskViewData {
        id: task.id.clone(),
        title: task.display_title().to_string(),
        completed: task.is_completed(),
    }
}

fn empty_tasks_view(filter: TasksFilterType) -> EmptyTasksViewData {
    match filter {
        TasksFilterType::AllTasks => EmptyTasksViewData {
            message: "You have no TO-DOs!",
            show_add_button: true,
        },
        TasksFilterType::ActiveTasks => EmptyTasksViewData {
            message: "You have no active TO-DOs!",
            show_add_button: false,
        },
        TasksFilterType::CompletedTasks => EmptyTasksViewData {
            message: "You have no completed TO-DOs!",
            show_add_button: false,
        },
    }
}
