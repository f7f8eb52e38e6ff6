//! Observability setup for confab binaries.
//!
//! Wraps `tracing-subscriber` composition: an env-filter, optional console
//! output, and an optional log sink that forwards each formatted line to the
//! TUI's debug traces screen. Console output is off while the TUI owns the
//! terminal; the sink is the only way logs reach the screen in that mode.
//!
//! ```no_run
//! use confab_observability::ObservabilityConfig;
//!
//! let config = ObservabilityConfig::new("confab").with_log_level("debug");
//! confab_observability::init(config)?;
//! tracing::info!("started");
//! # Ok::<(), confab_observability::ObservabilityError>(())
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
