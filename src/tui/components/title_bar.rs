// Title bar component
//
// Renders the app title with a spinner while a fetch is in flight.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let loading_indicator = if app.results.is_loading() {
        format!(" {} fetching", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" 👥 Random Users{}", loading_indicator);

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(false).fg(app.theme.title))
                .title_top(Line::from(format!(" v{} ", VERSION)).right_aligned()),
        );

    f.render_widget(title, area);
}
