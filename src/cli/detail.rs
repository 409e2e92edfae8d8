use std::sync::Arc;

use serde_json::json;

use crate::error::TaskloopError;
use crate::output;
use crate::runtime::Controller;
use crate::taskdetail::handlers::TaskDetailRouter;
use crate::taskdetail::{TaskDetailEvent, TaskDetailLogic};
use crate::ui::{NavigationRequest, UiRecord};

use super::context::AppContext;
use super::{finish, print_json, reported_failure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Show,
    Toggle,
    Delete,
}

pub fn run(id: &str, action: DetailAction, json_output: bool) -> i32 {
    finish(run_inner(id, action, json_output), json_output)
}

fn run_inner(id: &str, action: DetailAction, json_output: bool) -> Result<i32, TaskloopError> {
    let ctx = AppContext::open()?;
    let task = ctx.find_task(id)?;

    let events = match action {
        DetailAction::Show => Vec::new(),
        DetailAction::Toggle if task.is_completed() => vec![TaskDetailEvent::ActivateTaskRequested],
        DetailAction::Toggle => vec![TaskDetailEvent::CompleteTaskRequested],
        DetailAction::Delete => vec![TaskDetailEvent::DeleteTaskRequested],
    };

    let router = TaskDetailRouter::new(ctx.local(), ctx.remote(), ctx.feedback(), ctx.navigator());
    let mut controller = Controller::<TaskDetailLogic>::new(task, Arc::new(router));
    let outcome = ctx.run_screen(&mut controller, events);
    ctx.persist_remote()?;
    outcome?;

    let records = ctx.outbox.drain();
    if let Some(e) = reported_failure(&records) {
        return Err(e);
    }

    let task = controller.model();
    let deleted = records
        .iter()
        .any(|r| matches!(r, UiRecord::Navigation(NavigationRequest::Exit { successful: true })));

    if json_output {
        let mut data = output::json::records_json(&records);
        data["task"] = output::json::task_json(&task);
        data["deleted"] = json!(deleted);
        print_json(&output::json::success(data));
    } else {
        output::text::print_records(&records);
        if deleted {
            println!("Deleted task: {} ({})", task.display_title(), task.id);
        } else {
            output::text::print_task(&task);
        }
    }
    Ok(0)
}
