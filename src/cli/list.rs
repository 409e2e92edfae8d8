use std::sync::Arc;

use tracing::debug;

use crate::error::TaskloopError;
use crate::output;
use crate::runtime::Controller;
use crate::state;
use crate::tasks::handlers::TasksListRouter;
use crate::tasks::view::tasks_list_view_data;
use crate::tasks::{TasksFilterType, TasksListEvent, TasksListLogic, TasksListModel};

use super::context::AppContext;
use super::{finish, print_json, reported_failure};

/// What to do on the list screen once it has loaded.
pub enum ListAction {
    Show(Option<TasksFilterType>),
    Refresh,
    Complete(String),
    Activate(String),
    ClearCompleted,
    /// Sent by the add flow after it stored a new task.
    TaskCreated,
}

impl ListAction {
    fn events(self) -> Vec<TasksListEvent> {
        match self {
            Self::Show(None) => Vec::new(),
            Self::Show(Some(filter)) => vec![TasksListEvent::FilterSelected(filter)],
            Self::Refresh => vec![TasksListEvent::RefreshRequested],
            Self::Complete(id) => vec![TasksListEvent::TaskMarkedComplete(id)],
            Self::Activate(id) => vec![TasksListEvent::TaskMarkedActive(id)],
            Self::ClearCompleted => vec![TasksListEvent::ClearCompletedTasksRequested],
            Self::TaskCreated => vec![TasksListEvent::TaskCreated],
        }
    }
}

pub fn run(action: ListAction, json_output: bool) -> i32 {
    finish(
        AppContext::open().and_then(|ctx| run_with(&ctx, action, json_output)),
        json_output,
    )
}

/// Runs the list screen on an already opened context. The model is saved even when an
/// event was rejected, so the next run restores what the screen last showed.
pub(crate) fn run_with(
    ctx: &AppContext,
    action: ListAction,
    json_output: bool,
) -> Result<i32, TaskloopError> {
    let state_path = ctx.config.state_path();
    let restored = state::load::<TasksListModel>(&state_path)?.unwrap_or_default();
    debug!(restored = restored.tasks.is_some(), "list screen starting");

    let router = TasksListRouter::new(ctx.local(), ctx.remote(), ctx.feedback(), ctx.navigator());
    let mut controller = Controller::<TasksListLogic>::new(restored, Arc::new(router));
    let outcome = ctx.run_screen(&mut controller, action.events());

    let model = controller.model();
    state::save(&state_path, &model)?;
    ctx.persist_remote()?;
    outcome?;

    let records = ctx.outbox.drain();
    if let Some(e) = reported_failure(&records) {
        return Err(e);
    }

    let view = tasks_list_view_data(&model);
    if json_output {
        let mut data = output::json::records_json(&records);
        data["view"] = output::json::list_view_json(&view);
        print_json(&output::json::success(data));
    } else {
        output::text::print_records(&records);
        output::text::print_list_view(&view);
    }
    Ok(0)
}
