//! Navigation and feedback collaborators. The cores only ever send them requests.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::error::TaskloopError;
use crate::models::Task;
use crate::tasks::FeedbackType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    StartTaskCreation,
    ShowTaskDetails(Task),
    OpenTaskEditor(Task),
    Exit { successful: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notice {
    SavedSuccessfully,
    MarkedActive,
    MarkedComplete,
    ClearedCompleted,
    LoadingError,
    TaskSaveFailed,
    TaskDeletionFailed,
    EmptyTaskNotAllowed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::SavedSuccessfully => FeedbackType::SavedSuccessfully.message(),
            Self::MarkedActive => FeedbackType::MarkedActive.message(),
            Self::MarkedComplete => FeedbackType::MarkedComplete.message(),
            Self::ClearedCompleted => FeedbackType::ClearedCompleted.message(),
            Self::LoadingError => FeedbackType::LoadingError.message(),
            Self::TaskSaveFailed => "Failed to save task",
            Self::TaskDeletionFailed => "Failed to delete task",
            Self::EmptyTaskNotAllowed => "TO-DOs cannot be empty",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::LoadingError
                | Self::TaskSaveFailed
                | Self::TaskDeletionFailed
                | Self::EmptyTaskNotAllowed
        )
    }
}

impl From<FeedbackType> for Notice {
    fn from(feedback: FeedbackType) -> Self {
        match feedback {
            FeedbackType::SavedSuccessfully => Self::SavedSuccessfully,
            FeedbackType::MarkedActive => Self::MarkedActive,
            FeedbackType::MarkedComplete => Self::MarkedComplete,
            FeedbackType::ClearedCompleted => Self::ClearedCompleted,
            FeedbackType::LoadingError => Self::LoadingError,
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, request: NavigationRequest);
}

/// Displays a notice. Whether display succeeded is never reported back.
pub trait FeedbackView: Send + Sync {
    fn show(&self, notice: Notice);

    /// The storage error behind a failure event. Events only carry the outcome, so front
    /// ends that report error codes receive the cause here.
    fn report_failure(&self, _error: &TaskloopError) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiRecord {
    Notice(Notice),
    Navigation(NavigationRequest),
    Failure(TaskloopError),
}

/// Records everything sent to the UI so a front end can render it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    records: Arc<Mutex<Vec<UiRecord>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<UiRecord> {
        self.records.lock().clone()
    }

    pub fn drain(&self) -> Vec<UiRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.records
            .lock()
            .iter()
            .filter_map(|r| match r {
                UiRecord::Notice(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<TaskloopError> {
        self.records
            .lock()
            .iter()
            .filter_map(|r| match r {
                UiRecord::Failure(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<NavigationRequest> {
        self.records
            .lock()
            .iter()
            .filter_map(|r| match r {
                UiRecord::Navigation(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Navigator for Outbox {
    fn navigate(&self, request: NavigationRequest) {
        debug!(?request, "navigation requested");
        self.records.lock().push(UiRecord::Navigation(request));
    }
}

impl FeedbackView for Outbox {
    fn show(&self, notice: Notice) {
        debug!(?notice, "notice shown");
        self.records.lock().push(UiRecord::Notice(notice));
    }

    fn report_failure(&self, error: &TaskloopError) {
        debug!(code = error.code.as_str(), "failure recorded");
        self.records.lock().push(UiRecord::Failure(error.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbox_keeps_order_and_splits_by_kind() {
        let outbox = Outbox::new();
        outbox.show(Notice::MarkedComplete);
        outbox.navigate(NavigationRequest::Exit { successful: true });
        outbox.show(Notice::TaskSaveFailed);

        assert_eq!(outbox.records().len(), 3);
        assert_eq!(
            outbox.notices(),
            vec![Notice::MarkedComplete, Notice::TaskSaveFailed]
        );
        assert_eq!(
            outbox.navigations(),
            vec![NavigationRequest::Exit { successful: true }]
        );
        assert!(outbox.failures().is_empty());
        assert_eq!(outbox.drain().len(), 3);
        assert!(outbox.records().is_empty());
    }

    #[test]
    fn feedback_types_map_onto_notices() {
        assert_eq!(Notice::from(FeedbackType::LoadingError), Notice::LoadingError);
        assert!(Notice::LoadingError.is_error());
        assert!(!Notice::ClearedCompleted.is_error());
        assert_eq!(Notice::ClearedCompleted.message(), "Completed tasks cleared");
    }
}
