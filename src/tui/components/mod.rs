// Components module - reusable UI building blocks
//
// Rendered top to bottom:
// - Title bar: App name, fetch spinner, version
// - Form panel: Count field and Generate button
// - Card grid: Results pane for every fetch state
// - Logs panel: System log entries (toggled)
// - Status bar: Key hints, fetch state, theme
//
// Each component is a focused, single-responsibility module.

pub mod card_grid;
pub mod form_panel;
pub mod formatters;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;

// Re-export render functions for convenient access
// Usage: components::title_bar::render(f, area, app)
//    or: components::render_title(f, area, app)

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

pub fn render_form(f: &mut Frame, area: Rect, app: &App) {
    form_panel::render(f, area, app);
}

/// Render the results pane; needs `&mut` to keep the selection scrolled into view
pub fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    card_grid::render(f, area, app);
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
