//! Statistics screen: active/completed counts.

pub mod domain;
pub mod handlers;
pub mod logic;

pub use domain::*;
pub use logic::StatisticsLogic;
