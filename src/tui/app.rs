// TUI application state
//
// The root container: owns the input form, the results view and the
// currently requested count. Long-running work (the fetch, the copy
// confirmation timer) runs in spawned tasks that report back through an
// `AppMessage` channel drained by the event loop.

use super::clipboard::ClipboardWriter;
use super::form::InputForm;
use super::results::{CopyTicket, Movement, ResultsView};
use super::theme::{Theme, ThemeKind};
use crate::api::{FetchError, UserSource};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::users::{DateStyle, RequestCount, UserRecord};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    Results,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Form => Focus::Results,
            Focus::Results => Focus::Form,
        }
    }
}

/// Messages posted back to the event loop by spawned tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch finished; `generation` identifies the request it answers
    Fetched {
        generation: u64,
        result: Result<Vec<UserRecord>, FetchError>,
    },
    /// The confirmation timer of a copy action ran out
    CopyExpired { ticket: CopyTicket },
}

/// Main application state for the TUI
pub struct App {
    pub form: InputForm,
    pub results: ResultsView,
    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Advanced on every tick; drives the spinner
    pub animation_frame: usize,

    /// Card columns of the last drawn frame
    pub grid_columns: usize,

    date_style: DateStyle,
    copy_flash: Duration,
    source: Arc<dyn UserSource>,
    clipboard: Box<dyn ClipboardWriter>,
    tx: mpsc::Sender<AppMessage>,
}

impl App {
    pub fn new(
        config: &Config,
        log_buffer: LogBuffer,
        source: Arc<dyn UserSource>,
        clipboard: Box<dyn ClipboardWriter>,
        tx: mpsc::Sender<AppMessage>,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using Dark", config.theme);
            ThemeKind::Dark
        });

        Self {
            form: InputForm::new(),
            results: ResultsView::new(),
            focus: Focus::Form,
            should_quit: false,
            show_logs: false,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            animation_frame: 0,
            grid_columns: 1,
            date_style: config.date_style.clone(),
            copy_flash: Duration::from_millis(config.copy_flash_ms),
            source,
            clipboard,
            tx,
        }
    }

    pub fn date_style(&self) -> &DateStyle {
        &self.date_style
    }

    /// The count currently shown (or being loaded); `None` before the
    /// first submission
    pub fn request_count(&self) -> Option<RequestCount> {
        self.results.count()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Submit the form if it holds a count
    pub fn submit_form(&mut self) {
        if let Some(count) = self.form.submit() {
            self.submit_count(count);
        }
    }

    /// Start a new fetch cycle for `count`
    ///
    /// Repeating the current count fetches a fresh batch.
    pub fn submit_count(&mut self, count: RequestCount) {
        let generation = self.results.load(count);
        self.focus = Focus::Results;
        tracing::info!("Requesting {} users (generation {})", count, generation);

        let fetch = self.source.fetch(count);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch.await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(AppMessage::Fetched { generation, result }).await;
        });
    }

    /// Copy the selected card and schedule its confirmation to expire
    pub fn copy_selected(&mut self) {
        let Some(ticket) = self
            .results
            .copy_selected(self.clipboard.as_mut(), &self.date_style)
        else {
            return;
        };

        // Deadline is fixed now, not when the task first gets polled
        let deadline = tokio::time::Instant::now() + self.copy_flash;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(AppMessage::CopyExpired { ticket }).await;
        });
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Fetched { generation, result } => {
                self.results.apply(generation, result);
            }
            AppMessage::CopyExpired { ticket } => {
                self.results.expire_copy(ticket);
            }
        }
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::debug!("Theme switched to {}", self.theme_kind.name());
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Handle keyboard input
    /// Layered dispatch: Global → Form digits → Focused pane
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Release/Repeat events only show up with enhanced keyboard reporting
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_key(&key_event) {
            return;
        }

        if let KeyCode::Char(c) = key_event.code {
            if c.is_ascii_digit() {
                self.focus = Focus::Form;
                self.form.push_char(c);
                return;
            }
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key_event.code),
            Focus::Results => self.handle_results_key(key_event.code),
        }
    }

    /// Bracketed paste always targets the form
    pub fn handle_paste(&mut self, text: &str) {
        self.focus = Focus::Form;
        if !self.form.paste(text) {
            tracing::debug!("Ignored paste that is not a valid count");
        }
    }

    fn handle_global_key(&mut self, key_event: &KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::Char('t') => self.next_theme(),
            KeyCode::Char('y') | KeyCode::Char('c') => self.copy_selected(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            _ => return false,
        }
        true
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Esc => self.form.clear(),
            KeyCode::Down if !self.results.records().is_empty() => self.focus = Focus::Results,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        let movement = match key {
            KeyCode::Enter => {
                self.copy_selected();
                return;
            }
            KeyCode::Esc => {
                self.focus = Focus::Form;
                return;
            }
            KeyCode::Left => Movement::Left,
            KeyCode::Right => Movement::Right,
            KeyCode::Up => Movement::Up,
            KeyCode::Down => Movement::Down,
            KeyCode::Home => Movement::First,
            KeyCode::End => Movement::Last,
            _ => return,
        };
        self.results.move_selection(movement, self.grid_columns);
    }
}
