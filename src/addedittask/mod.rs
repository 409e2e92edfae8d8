//! Task creation and editing form.

pub mod domain;
pub mod handlers;
pub mod logic;

pub use domain::*;
pub use logic::AddEditTaskLogic;
