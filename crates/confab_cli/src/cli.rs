//! CLI argument definitions using clap derive macros.

use clap::{Parser, ValueEnum};
use confab_tui::Appearance;

/// Terminal chat frontend for AI agents
#[derive(Parser)]
#[command(name = "confab", about, version)]
pub struct Cli {
    /// Agent whose conversations to show
    #[arg(long, default_value = "assistant", env = "CONFAB_AGENT")]
    pub agent: String,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark", env = "CONFAB_APPEARANCE")]
    pub appearance: AppearanceArg,

    /// Log filter for the runtime log screen (e.g. "info,confab_backend=debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Simulated reply delay in milliseconds for the in-memory backend
    #[arg(long, default_value_t = 600)]
    pub reply_delay_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum AppearanceArg {
    #[default]
    Dark,
    Light,
}

impl From<AppearanceArg> for Appearance {
    fn from(value: AppearanceArg) -> Self {
        match value {
            AppearanceArg::Dark => Appearance::Dark,
            AppearanceArg::Light => Appearance::Light,
        }
    }
}
