// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, paste, timer ticks)
// - Rendering the UI
// - Receiving fetch results and copy-timer expiries from spawned tasks

pub mod app;
pub mod clipboard;
pub mod components;
pub mod form;
pub mod layout;
pub mod results;
pub mod theme;
pub mod views;

use crate::api::UserSource;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, AppMessage};
use clipboard::SystemClipboard;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the app message channel
///
/// At most one fetch result per submission and one expiry per copy are in
/// flight, so this is never close to full in practice.
const MESSAGE_BUFFER: usize = 64;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, source: Arc<dyn UserSource>) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::channel(MESSAGE_BUFFER);
    let mut app = App::new(
        &config,
        log_buffer,
        source,
        Box::new(SystemClipboard::default()),
        tx,
    );
    tracing::info!("TUI started (theme: {})", app.theme_kind.name());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Terminal input (keys and bracketed paste)
/// 2. Timer ticks (spinner animation)
/// 3. App messages (fetch results, copy expiries)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppMessage>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(150));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Terminal input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => app.handle_key(key_event),
                        Ok(Event::Paste(text)) => app.handle_paste(&text),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for the spinner
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Results from spawned tasks
            Some(message) = rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}
