//! Observability configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for formatted log lines (feeds the TUI debug screen). Called from
/// the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

fn default_service_name() -> String {
    "confab".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name, included in console output.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Console/fmt output. Off while a TUI owns the terminal.
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Filter directives (e.g. "info,confab_backend=debug"). Falls back to
    /// the environment, then "info".
    #[serde(default)]
    pub log_level: Option<String>,

    /// Per-line sink. Not part of serialized config.
    #[serde(skip)]
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

// Arc<dyn Fn> has no Debug; show presence only.
impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.is_some())
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment: `SERVICE_NAME` for the name, `CONFAB_LOG`
    /// (then `RUST_LOG`) for the filter.
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| default_service_name()),
            log_level: std::env::var("CONFAB_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .ok(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ObservabilityConfig::new("confab-tui")
            .with_console(false)
            .with_log_level("debug");
        assert_eq!(config.service_name, "confab-tui");
        assert!(!config.enable_console);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn deserialize_defaults_and_skips_sink() {
        let config: ObservabilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.service_name, "confab");
        assert!(config.enable_console);
        assert!(config.log_sink.is_none());
    }

    #[test]
    fn debug_does_not_require_sink_debug() {
        let sink: LogSink = Arc::new(|_| {});
        let config = ObservabilityConfig::default().with_log_sink(sink);
        assert!(format!("{config:?}").contains("log_sink: true"));
    }
}
