//! Global subscriber installation.

pub mod spans;

use causeway_core::config::ObservabilityConfig;
use causeway_core::errors::ConfigError;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, else the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| ConfigError::invalid("observability.log_level", e.to_string()))
}

/// Install the global fmt subscriber.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init(config: &ObservabilityConfig) -> Result<bool, ConfigError> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    if installed {
        tracing::debug!(level = %config.log_level, json = config.json, "tracing initialised");
    }
    Ok(installed)
}
