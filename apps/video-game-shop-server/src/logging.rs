use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Output goes to stderr so `check` and
/// `--print-config` keep stdout clean.
///
/// # Errors
/// Returns an error when `logging.level` is not a valid filter directive.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid logging.level '{}'", config.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    // Only fails when a subscriber is already installed
    if let Err(e) = installed {
        tracing::debug!(error = %e, "Global tracing subscriber already set");
    }

    Ok(())
}
