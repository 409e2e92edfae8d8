use crate::error::TaskloopError;
use crate::runtime::{First, Logic, Next};

use super::domain::{StatisticsEffect, StatisticsEvent, StatisticsState};

pub struct StatisticsLogic;

impl Logic for StatisticsLogic {
    type Model = StatisticsState;
    type Event = StatisticsEvent;
    type Effect = StatisticsEffect;

    fn init(state: StatisticsState) -> First<StatisticsState, StatisticsEffect> {
        init(state)
    }

    fn update(
        state: &StatisticsState,
        event: StatisticsEvent,
    ) -> Result<Next<StatisticsState, StatisticsEffect>, TaskloopError> {
        Ok(update(state, event))
    }
}

/// Restored counts are kept as they are; anything else reloads.
pub fn init(state: StatisticsState) -> First<StatisticsState, StatisticsEffect> {
    match state {
        StatisticsState::Loaded { .. } => First::first(state),
        StatisticsState::Loading | StatisticsState::Failed => {
            First::first_with(StatisticsState::Loading, vec![StatisticsEffect::LoadTasks])
        }
    }
}

pub fn update(
    _state: &StatisticsState,
    event: StatisticsEvent,
) -> Next<StatisticsState, StatisticsEffect> {
    match event {
        StatisticsEvent::TasksLoaded(tasks) => {
            let completed_count = tasks.iter().filter(|t| t.is_completed()).count();
            Next::next(StatisticsState::Loaded {
                active_count: tasks.len() - completed_count,
                completed_count,
            })
        }
        StatisticsEvent::TasksLoadingFailed => Next::next(StatisticsState::Failed),
    }
}
