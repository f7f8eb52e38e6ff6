//! Error types for the observability crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// The global tracing subscriber could not be installed (usually a
    /// second init in the same process).
    #[error("failed to initialize tracing: {0}")]
    InitFailed(String),

    /// Invalid configuration value (bad filter directive, empty sink).
    #[error("invalid observability config: {0}")]
    Config(String),
}
