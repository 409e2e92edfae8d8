use clap::Parser;
use std::process;

use taskloop::cli;
use taskloop::cli::commands::{Cli, Commands};
use taskloop::cli::detail::DetailAction;
use taskloop::cli::list::ListAction;
use taskloop::logging;

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    if let Err(e) = logging::init_tracing(cli_args.verbose) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output),
        Commands::List { filter } => {
            cli::list::run(ListAction::Show(filter.map(Into::into)), json_output)
        }
        Commands::Refresh => cli::list::run(ListAction::Refresh, json_output),
        Commands::Complete { id } => cli::list::run(ListAction::Complete(id), json_output),
        Commands::Activate { id } => cli::list::run(ListAction::Activate(id), json_output),
        Commands::ClearCompleted => cli::list::run(ListAction::ClearCompleted, json_output),
        Commands::Add { title, description } => cli::form::run_add(&title, &description, json_output),
        Commands::Edit {
            id,
            title,
            description,
        } => cli::form::run_edit(&id, title.as_deref(), description.as_deref(), json_output),
        Commands::Show { id } => cli::detail::run(&id, DetailAction::Show, json_output),
        Commands::Toggle { id } => cli::detail::run(&id, DetailAction::Toggle, json_output),
        Commands::Delete { id } => cli::detail::run(&id, DetailAction::Delete, json_output),
        Commands::Stats => cli::stats::run(json_output),
    };

    process::exit(exit_code);
}
