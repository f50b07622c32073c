// Form panel component
//
// The count field and the "Generate Users" button. The button is drawn
// dimmed while the field is empty, mirroring `InputForm::can_submit`.

use crate::tui::app::{App, Focus};
use crate::users::{MAX_COUNT, MIN_COUNT};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Enter number of users";
const BUTTON: &str = "[ Generate Users ]";

/// Render the form panel (2 content lines)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Form;

    let field = if app.form.value().is_empty() {
        Span::styled(PLACEHOLDER, theme.muted_style())
    } else {
        Span::styled(
            app.form.value().to_string(),
            theme.base_style().add_modifier(Modifier::BOLD),
        )
    };
    let cursor = if focused { "▏" } else { " " };

    let button_style = if app.form.can_submit() {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.muted_style().add_modifier(Modifier::DIM)
    };

    let input_line = Line::from(vec![
        Span::styled(" Users: ", theme.base_style()),
        field,
        Span::styled(cursor, Style::default().fg(theme.border_focused)),
        Span::raw("   "),
        Span::styled(BUTTON, button_style),
    ]);

    let hint = format!(
        " {}-{} · Enter generate · Esc clear · Tab switch pane",
        MIN_COUNT, MAX_COUNT
    );
    let hint_line = Line::from(Span::styled(hint, theme.muted_style()));

    let panel = Paragraph::new(vec![input_line, hint_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused))
            .title(" Request "),
    );

    f.render_widget(panel, area);
}
