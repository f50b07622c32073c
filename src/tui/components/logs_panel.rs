//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer, newest at the bottom.
//! Toggled with `l`; logging never writes to the terminal while the TUI owns it.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the logs panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(height);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, &app.theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(false))
            .title(" System Logs "),
    );

    f.render_widget(list, area);
}

/// Format a log entry for display; the crate prefix is dropped from targets
fn format_log_entry(entry: &LogEntry) -> String {
    let target = entry
        .target
        .strip_prefix("randusers::")
        .unwrap_or(&entry.target);
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        target,
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug => Style::default().fg(theme.log_debug),
        LogLevel::Trace => Style::default().fg(theme.log_trace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_line_has_time_level_and_message() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap(),
            level: LogLevel::Warn,
            target: "randusers::api".to_string(),
            message: "Random user API returned 503".to_string(),
        };

        assert_eq!(
            format_log_entry(&entry),
            "[09:03:07] WARN  api: Random user API returned 503"
        );
    }

    #[test]
    fn errors_are_bold() {
        let style = log_level_style(&LogLevel::Error, &Theme::default());
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(style.fg, Some(Theme::default().log_error));
    }
}
