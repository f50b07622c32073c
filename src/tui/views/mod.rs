// Views module - screen-level rendering logic
//
// One screen: title, form, results, optional logs, status. The grid column
// count is derived from the terminal width on every frame and stored on the
// app so key handling moves the selection the way the grid is drawn.

use super::app::App;
use super::components::{self, card_grid::CARD_HEIGHT};
use super::layout::grid_columns;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 4;
const LOGS_HEIGHT: u16 = 10;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let bg_block = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg_block, area);

    app.grid_columns = grid_columns(area.width);

    let mut constraints = vec![
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Min(CARD_HEIGHT / 3),
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_HEIGHT));

    let chunks = Layout::vertical(constraints).split(area);

    components::render_title(f, chunks[0], app);
    components::render_form(f, chunks[1], app);
    components::render_results(f, chunks[2], app);
    if app.show_logs {
        components::render_logs_panel(f, chunks[3], app);
    }
    components::render_status(f, chunks[chunks.len() - 1], app);
}
