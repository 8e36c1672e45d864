//! Tracing subscriber setup

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!(
            "packsmart={level},tower_http={level}",
            level = logging.level
        )))
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so `plan --format json` output stays machine readable
    let result = if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.with_context(|| "Failed to install tracing subscriber")
}
