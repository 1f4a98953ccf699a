use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn setup_logging(max_level: Level) -> Result<()> {
    // Logs go to stderr so they never interleave with console replies on stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set default tracing subscriber")
}
