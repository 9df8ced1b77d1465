use anyhow::Result;

use fantasy_xi::cli::Command;
use fantasy_xi::{handle_generate, handle_serve, interpret};

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
        Command::Serve { port, strategy } => handle_serve(*port, *strategy),
        Command::Generate {
            input,
            top,
            summary,
            strategy,
        } => handle_generate(input, *top, *summary, *strategy),
    }
}
