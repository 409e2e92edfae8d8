use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskDetails {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub details: TaskDetails,
}

impl Task {
    pub fn new(id: impl Into<String>, details: TaskDetails) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    /// A new task with a freshly generated id.
    pub fn with_generated_id(details: TaskDetails) -> Self {
        Self::new(ulid::Ulid::new().to_string(), details)
    }

    pub fn is_completed(&self) -> bool {
        self.details.completed
    }

    pub fn complete(&self) -> Self {
        Self {
            id: self.id.clone(),
            details: self.details.clone().with_completed(true),
        }
    }

    pub fn activate(&self) -> Self {
        Self {
            id: self.id.clone(),
            details: self.details.clone().with_completed(false),
        }
    }

    /// Title shown in lists; falls back to the description for untitled tasks.
    pub fn display_title(&self) -> &str {
        if self.details.title.is_empty() {
            &self.details.description
        } else {
            &self.details.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_and_activate_derive_new_values() {
        let task = Task::new("1", TaskDetails::new("Title", "Desc"));
        let done = task.complete();
        assert!(done.is_completed());
        assert!(!task.is_completed());
        assert_eq!(done.activate(), task);
    }

    #[test]
    fn default_details_are_empty_and_active() {
        let d = TaskDetails::default();
        assert_eq!(d, TaskDetails::new("", ""));
        assert!(!d.completed);
    }

    #[test]
    fn display_title_falls_back_to_description() {
        let task = Task::new("1", TaskDetails::new("", "only description"));
        assert_eq!(task.display_title(), "only description");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Task::with_generated_id(TaskDetails::default());
        let b = Task::with_generated_id(TaskDetails::default());
        assert_ne!(a.id, b.id);
    }
}
