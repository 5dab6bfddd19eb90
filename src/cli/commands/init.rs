use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        info("Initializing quakemap…");

        let cfg = Config::init(config_path, *force)?;

        success(format!("Config file: {}", config_path.display()));
        info(format!("Feed URL   : {}", cfg.feed.url));
        info(format!(
            "Set the tile access token with --token, ${} or `access_token` in the file.",
            crate::config::ACCESS_TOKEN_ENV
        ));
    }
    Ok(())
}
