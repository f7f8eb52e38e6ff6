//! Subscriber initialization.
//!
//! Composes the registry once from the configured layers: env-filter,
//! optional console fmt layer, optional TUI log sink layer.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::tui_log_layer;

fn filter_for(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match &config.log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("log filter {level:?}: {e}"))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Initialize tracing with the given configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let console = config
        .enable_console
        .then_some(tracing_subscriber::fmt::layer());
    let sink = tui_log_layer::tui_log_layer(config.log_sink.clone());

    Registry::default()
        .with(filter_for(&config)?)
        .with(console)
        .with(sink)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize from [ObservabilityConfig::from_env].
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
