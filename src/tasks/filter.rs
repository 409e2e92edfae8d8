use crate::models::Task;

use super::domain::TasksFilterType;

/// Stable projection of `tasks` by completion state. Never reorders.
pub fn filter_tasks(tasks: &[Task], filter: TasksFilterType) -> Vec<Task> {
    match filter {
        TasksFilterType::AllTasks => tasks.to_vec(),
        TasksFilterType::ActiveTasks => tasks.iter().filter(|t| !t.is_completed()).cloned().collect(),
        TasksFilterType::CompletedTasks => tasks.iter().filter(|t| t.is_completed()).cloned().collect(),
    }
}
