//! Single task detail screen.

pub mod domain;
pub mod handlers;
pub mod logic;

pub use domain::*;
pub use logic::TaskDetailLogic;
