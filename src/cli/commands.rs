use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::tasks::TasksFilterType;

const VERSION: &str = env!("TASKLOOP_VERSION");

#[derive(Parser)]
#[command(
    name = "taskloop",
    version = VERSION,
    about = "To-do manager driven by per-screen event loops",
    after_help = "\
NOTE:
  Data lives in ./.taskloop (override with TASKLOOP_HOME).
  Run `taskloop init` before any other command.
  The simulated remote answers reads after TASKLOOP_REMOTE_LATENCY_MS (default 3000).

EXIT CODES:
  0  Success
  1  Error (not initialized, unknown task, storage failure, empty task, etc.)

BEHAVIOR NOTES:
  The first `list` without saved state pulls the remote into local storage.
  Later runs restore the saved list and re-read local storage only; use `refresh` to pull again.
  `clear-completed` with nothing completed is a no-op."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging on stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, database and default config
    Init,

    /// Show the task list
    List {
        /// Only show tasks of this kind
        #[arg(long, value_enum)]
        filter: Option<FilterArg>,
    },

    /// Pull tasks from the remote into local storage
    Refresh,

    /// Create a task
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change a task's title or description
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Show one task
    Show { id: String },

    /// Mark a task complete from the list
    Complete { id: String },

    /// Mark a task active from the list
    Activate { id: String },

    /// Flip a task's completion from its detail screen
    Toggle { id: String },

    /// Delete a task
    Delete { id: String },

    /// Delete every completed task
    ClearCompleted,

    /// Active and completed counts
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TasksFilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::AllTasks,
            FilterArg::Active => Self::ActiveTasks,
            FilterArg::Completed => Self::CompletedTasks,
        }
    }
}
