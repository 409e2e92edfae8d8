use crate::models::Task;
use crate::statistics::StatisticsState;
use crate::tasks::view::{TasksListViewData, ViewState};
use crate::ui::{NavigationRequest, UiRecord};

pub fn print_list_view(view: &TasksListViewData) {
    println!("{} tasks{}", view.filter_label, if view.loading { " (loading)" } else { "" });
    match &view.view_state {
        ViewState::AwaitingTasks => println!("  Loading..."),
        ViewState::EmptyTasks(empty) => {
            println!("  {}", empty.message);
            if empty.show_add_button {
                println!("  Add one with `taskloop add <title>`.");
            }
        }
        ViewState::HasTasks { tasks } => {
            for t in tasks {
                println!(
                    "  [{}] {} ({})",
                    if t.completed { "x" } else { " " },
                    t.title,
                    t.id
                );
            }
        }
    }
}

pub fn print_task(t: &Task) {
    println!("Task: {} ({})", t.display_title(), t.id);
    if !t.details.description.is_empty() {
        println!("  Description: {}", t.details.description);
    }
    println!(
        "  Status: {}",
        if t.is_completed() { "completed" } else { "active" }
    );
}

pub fn print_statistics(state: &StatisticsState) {
    match state {
        StatisticsState::Loading => println!("Loading statistics..."),
        StatisticsState::Failed => println!("Could not load statistics."),
        StatisticsState::Loaded {
            active_count: 0,
            completed_count: 0,
        } => println!("No tasks."),
        StatisticsState::Loaded {
            active_count,
            completed_count,
        } => {
            println!("Active tasks: {active_count}");
            println!("Completed tasks: {completed_count}");
        }
    }
}

/// Errors go to stderr, everything else to stdout.
pub fn print_records(records: &[UiRecord]) {
    for r in records {
        match r {
            UiRecord::Notice(n) if n.is_error() => eprintln!("{}", n.message()),
            UiRecord::Notice(n) => println!("{}", n.message()),
            UiRecord::Navigation(NavigationRequest::OpenTaskEditor(t)) => {
                println!("Edit with `taskloop edit {}`", t.id)
            }
            UiRecord::Navigation(NavigationRequest::ShowTaskDetails(t)) => {
                println!("Details: `taskloop show {}`", t.id)
            }
            UiRecord::Navigation(_) | UiRecord::Failure(_) => {}
        }
    }
}
