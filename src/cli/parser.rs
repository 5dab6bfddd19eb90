use crate::core::{FeedLevel, FeedWindow};
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for quakemap
/// CLI application to map the live USGS earthquake feed
#[derive(Parser)]
#[command(
    name = "quakemap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch the live earthquake feed and render it as a styled interactive map",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override feed URL
    #[arg(global = true, long = "feed", value_name = "URL", conflicts_with = "input")]
    pub feed: Option<String>,

    /// Read the feed from a local GeoJSON file instead of the network
    #[arg(global = true, long = "input", value_name = "FILE")]
    pub input: Option<String>,

    /// Tile service access token (overrides $QUAKEMAP_ACCESS_TOKEN and the config file)
    #[arg(global = true, long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Fetch the feed and list the styled events
    List {
        #[arg(long, value_enum, help = "USGS summary feed tier")]
        level: Option<FeedLevel>,

        #[arg(long, value_enum, help = "USGS summary feed time window")]
        window: Option<FeedWindow>,

        #[arg(long = "min-mag", help = "Only show events above this magnitude")]
        min_mag: Option<f64>,

        #[arg(long, short = 'n', help = "Show at most N events")]
        limit: Option<usize>,
    },

    /// Print the magnitude legend
    Legend,

    /// Render the feed to a file (interactive map or data)
    Export {
        #[arg(long, value_enum, default_value = "html")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, value_enum, help = "USGS summary feed tier")]
        level: Option<FeedLevel>,

        #[arg(long, value_enum, help = "USGS summary feed time window")]
        window: Option<FeedWindow>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
