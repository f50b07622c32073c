// Status bar component
//
// Renders key hints for the focused pane, the active theme and the current
// fetch state at the bottom of the screen.

use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use crate::tui::results::FetchState;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: Full hints with labels
/// - Narrow: Keys only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let hints = match (app.focus, bp) {
        (Focus::Form, Breakpoint::Narrow) => "0-9 ⏎ Esc Tab",
        (Focus::Form, _) => "0-9 type │ ⏎ generate │ Esc clear │ Tab results",
        (Focus::Results, Breakpoint::Narrow) => "←↑↓→ y Tab",
        (Focus::Results, _) => "←↑↓→ select │ y/c/⏎ copy │ Tab form",
    };

    let state = match app.results.state() {
        FetchState::Idle => "idle".to_string(),
        FetchState::Loading => format!("{} loading", app.spinner_char()),
        FetchState::Success(records) => format!("{} shown", records.len()),
        FetchState::Failure(_) => "failed".to_string(),
    };

    let status_text = format!(
        " {} │ {} │ 🎨 {} │ l logs │ t theme │ q quit",
        hints,
        state,
        app.theme_kind.name()
    );

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
