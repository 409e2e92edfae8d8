use crate::error::TaskloopError;
use crate::models::Task;
use crate::runtime::{Logic, Next};

use super::domain::{AddEditTaskEffect, AddEditTaskEvent, AddEditTaskMode, AddEditTaskModel};

type AddEditNext = Next<AddEditTaskModel, AddEditTaskEffect>;

pub struct AddEditTaskLogic;

impl Logic for AddEditTaskLogic {
    type Model = AddEditTaskModel;
    type Event = AddEditTaskEvent;
    type Effect = AddEditTaskEffect;

    fn update(
        model: &AddEditTaskModel,
        event: AddEditTaskEvent,
    ) -> Result<AddEditNext, TaskloopError> {
        Ok(update(model, event))
    }
}

pub fn update(model: &AddEditTaskModel, event: AddEditTaskEvent) -> AddEditNext {
    match event {
        AddEditTaskEvent::TaskDefinitionCompleted { title, description } => {
            on_task_definition_completed(model, &title, &description)
        }
        AddEditTaskEvent::TaskCreatedSuccessfully | AddEditTaskEvent::TaskUpdatedSuccessfully => {
            Next::dispatch(vec![AddEditTaskEffect::Exit { successful: true }])
        }
        AddEditTaskEvent::TaskCreationFailed(_) | AddEditTaskEvent::TaskUpdateFailed(_) => {
            Next::dispatch(vec![AddEditTaskEffect::Exit { successful: false }])
        }
    }
}

fn on_task_definition_completed(
    model: &AddEditTaskModel,
    title: &str,
    description: &str,
) -> AddEditNext {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() && description.is_empty() {
        return Next::dispatch(vec![AddEditTaskEffect::NotifyEmptyTaskNotAllowed]);
    }

    let mut details = model.details.clone();
    details.title = title.to_string();
    details.description = description.to_string();
    let next_model = model.clone().with_details(details.clone());

    let effect = match &model.mode {
        AddEditTaskMode::Create => AddEditTaskEffect::CreateTask(details),
        AddEditTaskMode::Update(id) => AddEditTaskEffect::SaveTask(Task::new(id.clone(), details)),
    };
    Next::next_with(next_model, vec![effect])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDetails;

    fn definition(title: &str, description: &str) -> AddEditTaskEvent {
        AddEditTaskEvent::TaskDefinitionCompleted {
            title: title.into(),
            description: description.into(),
        }
    }

    #[test]
    fn blank_definition_is_rejected() {
        let next = update(&AddEditTaskModel::create(), definition("", "   "));
        assert!(!next.has_model());
        assert_eq!(next.effects(), &[AddEditTaskEffect::NotifyEmptyTaskNotAllowed]);
    }

    #[test]
    fn create_mode_requests_creation_with_trimmed_values() {
        let next = update(&AddEditTaskModel::create(), definition("  Title ", "\tDesc\n"));
        let details = TaskDetails::new("Title", "Desc");
        assert_eq!(next.model().unwrap().details, details);
        assert_eq!(next.effects(), &[AddEditTaskEffect::CreateTask(details)]);
    }

    #[test]
    fn update_mode_saves_under_existing_id() {
        let model = AddEditTaskModel {
            mode: AddEditTaskMode::Update("123".into()),
            details: TaskDetails::new("T1", "desc"),
        };
        let next = update(&model, definition("   ", "Hello"));
        let details = TaskDetails::new("", "Hello");
        assert_eq!(next.model().unwrap().details, details);
        assert_eq!(
            next.effects(),
            &[AddEditTaskEffect::SaveTask(Task::new("123", details))]
        );
    }

    #[test]
    fn update_mode_keeps_completion_flag() {
        let task = Task::new("9", TaskDetails::new("old", "").with_completed(true));
        let next = update(&AddEditTaskModel::update(&task), definition("new", ""));
        assert!(next.model().unwrap().details.completed);
    }

    #[test]
    fn success_and_failure_both_exit() {
        let model = AddEditTaskModel::create();
        for (event, successful) in [
            (AddEditTaskEvent::TaskCreatedSuccessfully, true),
            (AddEditTaskEvent::TaskUpdatedSuccessfully, true),
            (AddEditTaskEvent::TaskCreationFailed("disk".into()), false),
            (AddEditTaskEvent::TaskUpdateFailed("disk".into()), false),
        ] {
            let next = update(&model, event);
            assert!(!next.has_model());
            assert_eq!(next.effects(), &[AddEditTaskEffect::Exit { successful }]);
        }
    }
}
