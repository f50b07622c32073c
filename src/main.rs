// Random Users - generate random user profiles in the terminal
//
// Asks for a count (1-500), fetches that many generated profiles from the
// public random user API and shows them as cards. Any card's details can be
// copied to the system clipboard as a fixed-format text block.
//
// Architecture:
// - api (reqwest): One GET per request, decoded into UserRecords
// - users: Count bounds, record schema, clipboard text format
// - tui (ratatui): Form, card grid, logs; spawned tasks report over mpsc
// - cli (clap): Headless fetch and config management
// - config/logging: Layered TOML config and tracing setup

mod api;
mod cli;
mod config;
mod logging;
mod tui;
mod users;

use anyhow::Result;
use api::RandomUsersClient;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogTarget};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before any config is loaded, so a broken file
    // can still be reset or edited
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        return cli::handle_config(show, reset, edit, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::load()?;

    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // Headless: human-readable lines on stderr, leaving stdout to the output
    let log_buffer = LogBuffer::new();
    let target = match cli.command {
        Some(Commands::Fetch { .. }) => LogTarget::Stderr,
        _ => LogTarget::Tui,
    };
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _log_guard = logging::init(&config.logging, target, &log_buffer);

    for warning in &config.warnings {
        tracing::warn!("Config: {}", warning);
    }
    tracing::debug!("randusers v{} starting", config::VERSION);

    let client = RandomUsersClient::new(&config)?;

    match cli.command {
        Some(Commands::Fetch { count, json }) => {
            cli::run_fetch(&client, count, json, &config.date_style).await
        }
        _ => tui::run_tui(config, log_buffer, Arc::new(client)).await,
    }
}
