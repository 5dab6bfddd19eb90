//! quakemap main entrypoint.

use quakemap::run;
use quakemap::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics on stderr; stdout stays for user output. RUST_LOG=debug for details.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
