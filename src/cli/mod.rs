pub mod commands;
pub mod context;
pub mod detail;
pub mod form;
pub mod init;
pub mod list;
pub mod stats;

pub use commands::*;

use serde_json::Value;

use crate::error::TaskloopError;
use crate::output;
use crate::ui::{NavigationRequest, Notice, UiRecord};

pub(crate) fn print_json(v: &Value) {
    match serde_json::to_string_pretty(v) {
        Ok(body) => println!("{body}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// Turn a command result into an exit code, printing the error on the way.
pub(crate) fn finish(result: Result<i32, TaskloopError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                print_json(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

/// A failure the screen surfaced through the UI instead of an error value. A recorded cause
/// wins over the generic notice or exit that follows it.
pub(crate) fn reported_failure(records: &[UiRecord]) -> Option<TaskloopError> {
    let cause = records.iter().find_map(|r| match r {
        UiRecord::Failure(e) => Some(e.clone()),
        _ => None,
    });
    if cause.is_some() {
        return cause;
    }
    records.iter().find_map(|r| match r {
        UiRecord::Notice(n @ (Notice::TaskSaveFailed | Notice::TaskDeletionFailed)) => {
            Some(TaskloopError::database(n.message()))
        }
        UiRecord::Notice(n @ Notice::EmptyTaskNotAllowed) => {
            Some(TaskloopError::validation(n.message()))
        }
        UiRecord::Notice(n @ Notice::LoadingError) => Some(TaskloopError::remote(n.message())),
        UiRecord::Navigation(NavigationRequest::Exit { successful: false }) => {
            Some(TaskloopError::database("Failed to save task"))
        }
        _ => None,
    })
}
