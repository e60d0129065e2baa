//! boathours library root.
//! Exposes the CLI parser, the high-level run() function and the report
//! modules (data access, aggregation, rendering, delivery).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod mail;
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
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Configuration is resolved exactly once; nothing below reads the
    // environment again.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        dotenv::dotenv().ok();
        let mut cfg = Config::load(cli.config.as_deref())?;
        cfg.apply_env()?;
        cfg
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if !cfg.database.trim().is_empty() {
        cfg.database = cfg.database_path().to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
