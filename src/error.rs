use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    TaskNotFound,
    TasksNotLoaded,
    DuplicateTaskId,
    ValidationError,
    DatabaseError,
    RemoteError,
    ConfigError,
    LoopNotRunning,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::TasksNotLoaded => "TASKS_NOT_LOADED",
            Self::DuplicateTaskId => "DUPLICATE_TASK_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::RemoteError => "REMOTE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::LoopNotRunning => "LOOP_NOT_RUNNING",
        }
    }

    /// Invariant violations: the caller asked a core to act on state the UI should never expose.
    pub fn is_bug(&self) -> bool {
        matches!(self, Self::TaskNotFound | Self::TasksNotLoaded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TaskloopError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskloopError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "taskloop is not initialized. Run `taskloop init` first.",
        )
    }

    pub fn task_not_found(id: &str) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    pub fn tasks_not_loaded() -> Self {
        Self::new(ErrorCode::TasksNotLoaded, "Tasks have not been loaded yet")
    }

    pub fn duplicate_task_id(id: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateTaskId,
            format!("A task with id {id} already exists"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn loop_not_running() -> Self {
        Self::new(ErrorCode::LoopNotRunning, "The event loop is not running")
    }
}

impl From<rusqlite::Error> for TaskloopError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string())
    }
}

impl From<serde_json::Error> for TaskloopError {
    fn from(e: serde_json::Error) -> Self {
        Self::validation(format!("Malformed state: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_lookup_failures_are_bugs() {
        assert!(ErrorCode::TaskNotFound.is_bug());
        assert!(ErrorCode::TasksNotLoaded.is_bug());
        assert!(!ErrorCode::DatabaseError.is_bug());
        assert!(!ErrorCode::ValidationError.is_bug());
    }

    #[test]
    fn sqlite_errors_map_to_database_code() {
        let err: TaskloopError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.code.as_str(), "DATABASE_ERROR");
    }
}
