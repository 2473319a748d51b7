pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod economics;
pub mod errors;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::cli::Command;
use crate::config::settings::{database_path, AppConfig};
use crate::database::RecordScope;
use crate::domain::parse_result;
use crate::economics::EconomicsEngine;
use crate::services::server::ServerService;
use crate::services::summary::SummaryService;
use crate::stats::SystemClock;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env()?;
        let service = ServerService::new(port, config, database_path());
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let path = database_path();
    let pool = database::open(&path)?;
    let mut conn = database::get_connection(&pool)?;
    let inserted = database::setup::seed_reference_data(&mut conn)?;
    println!("Initialized {} ({} reference rows added)", path, inserted);
    Ok(())
}

pub fn handle_quote(tournament_type: &str, result: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    let record = parse_result(result)?;
    let assessment = EconomicsEngine::new(&config.economics).assess(tournament_type, record);

    println!("{} {} ({})", tournament_type.bold(), record, assessment.category);
    println!("  Cost        {:.2}", assessment.cost);
    println!("  Play points {}", assessment.prize.play_points);
    println!("  Chests      {}", assessment.prize.chests);
    println!("  QPs         {}", assessment.prize.qps);
    println!("  Profit      {:+.2}", assessment.profit());
    Ok(())
}

pub fn handle_summary(user: Option<i64>, team: Option<i64>) -> Result<()> {
    let config = AppConfig::from_env()?;
    let service = SummaryService::new(config, database_path());
    service.run(RecordScope::from_ids(user, team), &SystemClock)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
