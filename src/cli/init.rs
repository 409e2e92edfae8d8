use serde_json::json;

use crate::config::Config;
use crate::db::connection;
use crate::error::TaskloopError;
use crate::output;

use super::{finish, print_json};

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, TaskloopError> {
    let config = Config::load()?;
    connection::init_db(&config.db_path())?;
    config.write_if_missing()?;

    if json_output {
        print_json(&output::json::success(json!({
            "path": config.data_dir.to_string_lossy()
        })));
    } else {
        println!("Initialized taskloop at {}", config.data_dir.display());
    }
    Ok(0)
}
