use std::sync::Arc;

use crate::error::TaskloopError;
use crate::output;
use crate::runtime::Controller;
use crate::statistics::handlers::StatisticsRouter;
use crate::statistics::{StatisticsLogic, StatisticsState};

use super::context::AppContext;
use super::{finish, print_json};

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, TaskloopError> {
    let ctx = AppContext::open()?;
    let router = StatisticsRouter::new(ctx.local());
    let mut controller = Controller::<StatisticsLogic>::new(StatisticsState::Loading, Arc::new(router));
    ctx.run_screen(&mut controller, Vec::new())?;

    let state = controller.model();
    if state == StatisticsState::Failed {
        return Err(TaskloopError::database("Could not load statistics"));
    }

    if json_output {
        print_json(&output::json::success(output::json::statistics_json(&state)));
    } else {
        output::text::print_statistics(&state);
    }
    Ok(0)
}
