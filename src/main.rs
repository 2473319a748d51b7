use anyhow::Result;

use league_tracker::cli::Command;
use league_tracker::{
    handle_completions, handle_init, handle_quote, handle_serve, handle_summary, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Quote {
            tournament_type,
            result,
        } => handle_quote(tournament_type, result),
        Command::Summary { user, team } => handle_summary(*user, *team),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
