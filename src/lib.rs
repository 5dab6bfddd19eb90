//! quakemap library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg, config_path),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Legend => cli::commands::legend::handle(),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (`init` writes it, so it only needs the path)
    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };
    debug!(path = %config_path.display(), "configuration resolved");

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
