use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::selection::EnumerationStrategy;

#[derive(Parser, Debug)]
#[command(author, version, about = "fantasy cricket lineup generator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
        /// Lineup enumeration strategy
        #[arg(long, value_enum, default_value_t = EnumerationStrategy::Exhaustive)]
        strategy: EnumerationStrategy,
    },
    /// Rank lineups for a request stored in a JSON file
    Generate {
        /// Path to a generate-teams request body
        input: PathBuf,
        /// Number of best and worst lineups to return
        #[arg(short, long)]
        top: Option<usize>,
        /// Print a readable summary instead of JSON
        #[arg(short, long)]
        summary: bool,
        /// Lineup enumeration strategy
        #[arg(long, value_enum, default_value_t = EnumerationStrategy::Exhaustive)]
        strategy: EnumerationStrategy,
    },
}
