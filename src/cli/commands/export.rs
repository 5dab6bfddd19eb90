use crate::cli::commands::feed_loader;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        level,
        window,
        force,
    } = &cli.command
    {
        let loader = feed_loader(cli, cfg, *level, *window);
        let token = cfg.resolve_access_token(cli.token.as_deref());
        ExportLogic::export(cfg, &loader, token, *format, file, *force)?;
    }
    Ok(())
}
