// Card grid component
//
// Renders the results pane for every fetch state:
// - Idle: a hint (no count requested yet)
// - Loading: spinner + "Loading users..."
// - Failure: "Error: <reason>"
// - Success: header line plus one card per record, laid out in rows of
//   `app.grid_columns` cards and scrolled to keep the selection visible

use super::formatters::{pluralize, truncate};
use crate::tui::app::{App, Focus};
use crate::tui::results::FetchState;
use crate::tui::theme::Theme;
use crate::users::format::long_birth_date;
use crate::users::{DateStyle, UserRecord};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height including borders
pub const CARD_HEIGHT: u16 = 15;

/// Width of the longest label ("Nationality: ")
const LABEL_WIDTH: usize = 13;

const COPIED_NOTICE: &str = "✓ User details copied to clipboard!";

/// How a single card should be drawn
#[derive(Debug, Clone, Copy)]
pub struct CardState {
    pub index: usize,
    pub selected: bool,
    pub copied: bool,
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(focused))
        .title(" Results ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if matches!(app.results.state(), FetchState::Success(_)) {
        render_cards(f, inner, app, focused);
        return;
    }

    match app.results.state() {
        FetchState::Idle => {
            let hint = Paragraph::new(" Enter a number of users and press Enter to generate them.")
                .style(app.theme.muted_style());
            f.render_widget(hint, inner);
        }
        FetchState::Loading => {
            let text = format!(" {} Loading users...", app.spinner_char());
            let loading = Paragraph::new(text).style(Style::default().fg(app.theme.accent));
            f.render_widget(loading, inner);
        }
        FetchState::Failure(reason) => {
            let error = Paragraph::new(format!(" Error: {}", reason)).style(app.theme.error_style());
            f.render_widget(error, inner);
        }
        FetchState::Success(_) => {}
    }
}

fn render_cards(f: &mut Frame, area: Rect, app: &mut App, focused: bool) {
    if area.height == 0 {
        return;
    }

    let requested = app.request_count().map(|c| c.get()).unwrap_or(0);
    let header = Paragraph::new(format!(
        " Generated {}",
        pluralize(requested, "random user")
    ))
    .style(app.theme.muted_style());
    f.render_widget(header, Rect { height: 1, ..area });

    let grid = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };

    if app.results.records().is_empty() {
        let empty = Paragraph::new(" The API returned no users.").style(app.theme.muted_style());
        f.render_widget(empty, grid);
        return;
    }

    let columns = app.grid_columns.max(1);
    let rows_fit = (grid.height / CARD_HEIGHT).max(1) as usize;
    let first_row = app.results.scroll_to_selection(columns, rows_fit);
    let card_width = grid.width / columns as u16;

    let records = app.results.records();
    for row in 0..rows_fit {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            let Some(record) = records.get(index) else {
                return;
            };

            let y = grid.y + row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(grid.bottom().saturating_sub(y));
            if height == 0 {
                return;
            }
            let card_area = Rect {
                x: grid.x + col as u16 * card_width,
                y,
                width: card_width,
                height,
            };

            let state = CardState {
                index,
                selected: focused && index == app.results.selected(),
                copied: app.results.is_copied(index),
            };
            render_card(f, card_area, record, state, app.date_style(), &app.theme);
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    record: &UserRecord,
    state: CardState,
    date_style: &DateStyle,
    theme: &Theme,
) {
    let border_style = if state.copied {
        Style::default().fg(theme.success)
    } else if state.selected {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.border_style(false)
    };

    let badge = format!(" User #{} ", state.index + 1);
    let affordance = if state.copied {
        Span::styled(" [✓ copied] ", theme.success_style())
    } else if state.selected {
        Span::styled(" [y] copy ", theme.selected_style())
    } else {
        Span::styled(" [y] copy ", theme.muted_style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(badge, theme.title_style()))
        .title_top(Line::from(affordance).right_aligned());

    let width = block.inner(area).width as usize;
    let lines = card_lines(record, state.copied, width, date_style, theme);
    let card = Paragraph::new(lines).block(block);
    f.render_widget(card, area);
}

/// Content lines of one card, each fitted to `width` columns
pub fn card_lines(
    record: &UserRecord,
    copied: bool,
    width: usize,
    date_style: &DateStyle,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let address = &record.address;
    let indent = " ".repeat(LABEL_WIDTH);

    let mut lines = vec![
        Line::from(Span::styled(
            truncate(&record.full_name(), width),
            theme.base_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&record.email, width),
            Style::default().fg(theme.accent),
        )),
        field("Gender:", &record.gender, width, theme),
        field("Age:", &format!("{} years old", record.age()), width, theme),
        field("Phone:", &record.phone, width, theme),
        field("Cell:", &record.cell, width, theme),
        field("Nationality:", &record.nationality, width, theme),
        field(
            "Location:",
            &format!("{} {},", address.street.number, address.street.name),
            width,
            theme,
        ),
        Line::from(truncate(
            &format!("{}{}, {}", indent, address.city, address.state),
            width,
        )),
        Line::from(truncate(
            &format!("{}{} - {}", indent, address.country, address.postcode),
            width,
        )),
        field("Born:", &long_birth_date(record, date_style), width, theme),
        field("Photo:", record.picture_url(), width, theme),
    ];

    lines.push(if copied {
        Line::from(Span::styled(
            truncate(COPIED_NOTICE, width),
            theme.success_style(),
        ))
    } else {
        Line::default()
    });

    lines
}

fn field(label: &str, value: &str, width: usize, theme: &Theme) -> Line<'static> {
    let label = format!("{:<w$}", label, w = LABEL_WIDTH);
    let value = truncate(value, width.saturating_sub(LABEL_WIDTH));
    Line::from(vec![
        Span::styled(label, theme.muted_style()),
        Span::styled(value, theme.base_style()),
    ])
}
