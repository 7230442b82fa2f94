//! punchlog library root.
//! Exposes the CLI parser, the high-level run() function, and the derivation
//! engine modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod extract;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Overtime { .. } => cli::commands::overtime::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // the --data flag overrides the configured dataset directory
    if let Some(custom_data) = &cli.data {
        cfg.data_dir = custom_data.clone();
    }

    dispatch(&cli, &cfg)
}
