pub mod config;
pub mod export;
pub mod init;
pub mod legend;
pub mod list;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{FeedLevel, FeedLoader, FeedSource, FeedWindow};

/// Build the feed loader from global flags, subcommand filters and config.
pub(crate) fn feed_loader(
    cli: &Cli,
    cfg: &Config,
    level: Option<FeedLevel>,
    window: Option<FeedWindow>,
) -> FeedLoader {
    let source = FeedSource::resolve(
        &cfg.feed,
        cli.input.as_deref(),
        cli.feed.as_deref(),
        level,
        window,
    );
    FeedLoader::new(source, &cfg.feed)
}
