use serde_json::{json, Value};

use crate::error::TaskloopError;
use crate::models::Task;
use crate::statistics::StatisticsState;
use crate::tasks::view::TasksListViewData;
use crate::ui::{NavigationRequest, UiRecord};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskloopError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "title": t.details.title,
        "description": t.details.description,
        "completed": t.details.completed
    })
}

pub fn list_view_json(view: &TasksListViewData) -> Value {
    serde_json::to_value(view).unwrap_or(Value::Null)
}

pub fn statistics_json(state: &StatisticsState) -> Value {
    serde_json::to_value(state).unwrap_or(Value::Null)
}

/// Notices and navigation requests in the order the screen produced them.
pub fn records_json(records: &[UiRecord]) -> Value {
    let notices: Vec<Value> = records
        .iter()
        .filter_map(|r| match r {
            UiRecord::Notice(n) => Some(json!({ "kind": n, "message": n.message() })),
            _ => None,
        })
        .collect();
    let navigation: Vec<Value> = records
        .iter()
        .filter_map(|r| match r {
            UiRecord::Navigation(n) => Some(navigation_json(n)),
            _ => None,
        })
        .collect();
    json!({
        "notices": notices,
        "navigation": navigation
    })
}

fn navigation_json(request: &NavigationRequest) -> Value {
    match request {
        NavigationRequest::StartTaskCreation => json!({ "to": "add_task" }),
        NavigationRequest::ShowTaskDetails(t) => json!({ "to": "task_detail", "task_id": t.id }),
        NavigationRequest::OpenTaskEditor(t) => json!({ "to": "edit_task", "task_id": t.id }),
        NavigationRequest::Exit { successful } => json!({ "to": "back", "successful": successful }),
    }
}
