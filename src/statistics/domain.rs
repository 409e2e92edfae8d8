use serde::{Deserialize, Serialize};

use crate::models::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatisticsState {
    #[default]
    Loading,
    Loaded {
        active_count: usize,
        completed_count: usize,
    },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsEvent {
    TasksLoaded(Vec<Task>),
    TasksLoadingFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsEffect {
    LoadTasks,
}
