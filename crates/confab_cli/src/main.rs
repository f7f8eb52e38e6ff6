//! CLI entry point for confab.

mod cli;
mod controller;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;

use confab_backend::MemoryBackend;
use confab_core::AgentBackend;
use confab_observability::{LogSink, ObservabilityConfig, init};
use confab_tui::run_tui;

use crate::cli::Cli;
use crate::controller::Controller;

/// Load env files: ~/.confab/env first, then the project .env on top.
fn load_env() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".confab").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    let _ = dotenvy::dotenv();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env();
    let args = Cli::parse();

    // Tracing goes to the TUI log screen (Ctrl+D), not the terminal; console
    // output would corrupt the alternate screen.
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if let Some(level) = &args.log_level {
        obs_config = obs_config.with_log_level(level);
    }
    if let Err(e) = init(obs_config) {
        eprintln!("warning: observability init failed (continuing): {e}");
    }

    let backend: Arc<dyn AgentBackend> = Arc::new(MemoryBackend::with_reply_delay(
        Duration::from_millis(args.reply_delay_ms),
    ));

    let (event_tx, event_rx) = mpsc::channel(256);
    let (command_tx, command_rx) = mpsc::channel(64);
    let agent_name = args.agent.clone();
    tokio::spawn(Controller::new(backend, agent_name, event_tx, command_rx).run());

    run_tui(
        args.appearance.into(),
        args.agent,
        event_rx,
        command_tx,
        Some(log_rx),
    )
}
