pub mod connection;
pub mod migrations;
pub mod task_repo;

pub use connection::*;
