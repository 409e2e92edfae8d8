pub mod addedittask;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod runtime;
pub mod source;
pub mod state;
pub mod statistics;
pub mod taskdetail;
pub mod tasks;
pub mod ui;
