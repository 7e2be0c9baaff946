//! rStatusCheck library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Columns { .. } => cli::commands::columns::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve the config file (--config overrides the default location)
    let config_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    // 3️⃣ load config ONCE: file first, then environment overrides
    let cfg = Config::load(Some(&config_path))?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
