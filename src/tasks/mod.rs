//! Main task list screen.

pub mod domain;
pub mod filter;
pub mod handlers;
pub mod logic;
pub mod view;

pub use domain::*;
pub use filter::filter_tasks;
pub use logic::TasksListLogic;
