use std::sync::Arc;

use tracing::warn;

use crate::runtime::{Dispatch, EffectRouter};
use crate::source::TasksDataSource;

use super::domain::{StatisticsEffect, StatisticsEvent};

pub struct StatisticsRouter {
    local: Arc<dyn TasksDataSource>,
}

impl StatisticsRouter {
    pub fn new(local: Arc<dyn TasksDataSource>) -> Self {
        Self { local }
    }
}

impl EffectRouter<StatisticsEffect, StatisticsEvent> for StatisticsRouter {
    fn route(&self, effect: StatisticsEffect) -> Dispatch<StatisticsEvent> {
        match effect {
            StatisticsEffect::LoadTasks => {
                let local = Arc::clone(&self.local);
                Dispatch::function(async move {
                    match local.list().await {
                        Ok(tasks) => StatisticsEvent::TasksLoaded(tasks),
                        Err(e) => {
                            warn!(error = %e, "loading tasks for statistics failed");
                            StatisticsEvent::TasksLoadingFailed
                        }
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskDetails};
    use crate::runtime::Controller;
    use crate::source::TasksLocalDataSource;
    use crate::statistics::{StatisticsLogic, StatisticsState};
    use crate::tasks::handlers::testing::Unavailable;

    async fn settled(router: StatisticsRouter) -> StatisticsState {
        let mut controller =
            Controller::<StatisticsLogic>::new(StatisticsState::Loading, Arc::new(router));
        controller.start().unwrap();
        controller.settle().await;
        controller.stop().await;
        controller.model()
    }

    #[tokio::test]
    async fn counts_local_tasks_on_start() {
        let local = Arc::new(TasksLocalDataSource::in_memory().unwrap());
        for (id, completed) in [("1", false), ("2", true), ("3", true)] {
            let task = Task::new(id, TaskDetails::new(id, "").with_completed(completed));
            local.save(&task).await.unwrap();
        }

        assert_eq!(
            settled(StatisticsRouter::new(local)).await,
            StatisticsState::Loaded {
                active_count: 1,
                completed_count: 2
            }
        );
    }

    #[tokio::test]
    async fn unreadable_store_fails() {
        assert_eq!(
            settled(StatisticsRouter::new(Arc::new(Unavailable))).await,
            StatisticsState::Failed
        );
    }
}
