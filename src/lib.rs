pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod selection;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::selection::EnumerationStrategy;
use crate::services::generation::{self, GenerationService};
use crate::services::report;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, strategy: EnumerationStrategy) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut config = AppConfig::from_env();
        config.roster.strategy = strategy;
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_generate(
    input: &Path,
    top: Option<usize>,
    summary: bool,
    strategy: EnumerationStrategy,
) -> Result<()> {
    let mut config = AppConfig::from_env();
    config.roster.strategy = strategy;
    if let Some(top_n) = top {
        config.ranking.top_n = top_n;
    }

    let request = generation::load_request(input)?;
    let response = GenerationService::new(config).generate(request)?;

    if summary {
        print!("{}", report::render_summary(&response));
    } else {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
