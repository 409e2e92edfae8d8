use std::sync::Arc;

use crate::addedittask::handlers::AddEditTaskRouter;
use crate::addedittask::{AddEditTaskEvent, AddEditTaskLogic, AddEditTaskModel};
use crate::error::TaskloopError;
use crate::output;
use crate::runtime::Controller;

use super::context::AppContext;
use super::list::{self, ListAction};
use super::{finish, print_json, reported_failure};

pub fn run_add(title: &str, description: &str, json_output: bool) -> i32 {
    finish(run_add_inner(title, description, json_output), json_output)
}

pub fn run_edit(
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    json_output: bool,
) -> i32 {
    finish(run_edit_inner(id, title, description, json_output), json_output)
}

/// Submit the form once and fail if the screen refused it or could not store it.
fn submit(
    ctx: &AppContext,
    model: AddEditTaskModel,
    title: &str,
    description: &str,
) -> Result<(), TaskloopError> {
    let router = AddEditTaskRouter::new(ctx.local(), ctx.remote(), ctx.feedback(), ctx.navigator());
    let mut controller = Controller::<AddEditTaskLogic>::new(model, Arc::new(router));
    let outcome = ctx.run_screen(
        &mut controller,
        vec![AddEditTaskEvent::TaskDefinitionCompleted {
            title: title.to_string(),
            description: description.to_string(),
        }],
    );
    ctx.persist_remote()?;
    outcome?;

    match reported_failure(&ctx.outbox.drain()) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn run_add_inner(title: &str, description: &str, json_output: bool) -> Result<i32, TaskloopError> {
    let ctx = AppContext::open()?;
    submit(&ctx, AddEditTaskModel::create(), title, description)?;
    // Back on the list, which confirms the save and shows the new task.
    list::run_with(&ctx, ListAction::TaskCreated, json_output)
}

fn run_edit_inner(
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    json_output: bool,
) -> Result<i32, TaskloopError> {
    let ctx = AppContext::open()?;
    let task = ctx.find_task(id)?;
    let title = title.unwrap_or(&task.details.title).to_string();
    let description = description.unwrap_or(&task.details.description).to_string();

    submit(&ctx, AddEditTaskModel::update(&task), &title, &description)?;

    let updated = ctx.find_task(id)?;
    if json_output {
        print_json(&output::json::success(serde_json::json!({
            "task": output::json::task_json(&updated)
        })));
    } else {
        println!("Updated task: {} ({})", updated.display_title(), updated.id);
    }
    Ok(0)
}
