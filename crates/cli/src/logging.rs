//! Logger setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize a stderr logger at the given level.
///
/// `RUST_LOG`, when set, overrides `level`.
pub fn setup_logger(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
