// Results view state - fetch lifecycle, card selection and copy feedback
//
// State machine: Idle -> Loading -> {Success | Failure}. Every `load` starts
// a new generation; a response tagged with an older generation is dropped so
// a slow earlier request can't overwrite a newer one.
//
// The "copied" mark is keyed by a ticket. The expiry timer carries the ticket
// it was started for and only clears the mark if it still matches.

use super::clipboard::ClipboardWriter;
use crate::api::FetchError;
use crate::users::{details_text, DateStyle, RequestCount, UserRecord};

/// Where a fetch cycle currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading,
    Success(Vec<UserRecord>),
    Failure(String),
}

/// Identifies one successful copy action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

#[derive(Debug, Clone, Copy)]
struct CopiedMark {
    index: usize,
    ticket: CopyTicket,
}

/// Selection movement inside the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

#[derive(Debug)]
pub struct ResultsView {
    count: Option<RequestCount>,
    state: FetchState,
    generation: u64,
    selected: usize,
    /// First grid row on screen
    scroll_row: usize,
    copied: Option<CopiedMark>,
    next_ticket: u64,
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            count: None,
            state: FetchState::Idle,
            generation: 0,
            selected: 0,
            scroll_row: 0,
            copied: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Count of the current fetch cycle
    pub fn count(&self) -> Option<RequestCount> {
        self.count
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Records of a successful fetch; empty in every other state
    pub fn records(&self) -> &[UserRecord] {
        match &self.state {
            FetchState::Success(records) => records,
            _ => &[],
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fetch lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Enter `Loading` for `count`; returns the generation the caller must
    /// tag the response with
    pub fn load(&mut self, count: RequestCount) -> u64 {
        self.generation += 1;
        self.count = Some(count);
        self.state = FetchState::Loading;
        self.selected = 0;
        self.scroll_row = 0;
        self.copied = None;
        self.generation
    }

    /// Apply a fetch result; returns false if it belongs to a superseded
    /// generation and was discarded
    pub fn apply(&mut self, generation: u64, result: Result<Vec<UserRecord>, FetchError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Discarding stale response (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(records) => {
                tracing::info!("Showing {} users", records.len());
                FetchState::Success(records)
            }
            Err(e) => {
                tracing::warn!("Fetch failed: {}", e);
                FetchState::Failure(e.to_string())
            }
        };
        true
    }

    // ─────────────────────────────────────────────────────────────────────
    // Copy
    // ─────────────────────────────────────────────────────────────────────

    /// Copy the details of card `index`
    ///
    /// Only a successful clipboard write marks the card. Failures are logged
    /// and leave every flag as it was.
    pub fn copy(
        &mut self,
        index: usize,
        clipboard: &mut dyn ClipboardWriter,
        date_style: &DateStyle,
    ) -> Option<CopyTicket> {
        let record = self.records().get(index)?;
        let text = details_text(record, date_style);

        match clipboard.write_text(&text) {
            Ok(()) => {
                self.next_ticket += 1;
                let ticket = CopyTicket(self.next_ticket);
                self.copied = Some(CopiedMark { index, ticket });
                tracing::info!("Copied details of user #{}", index + 1);
                Some(ticket)
            }
            Err(e) => {
                tracing::warn!("Failed to copy user #{}: {:#}", index + 1, e);
                None
            }
        }
    }

    pub fn copy_selected(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        date_style: &DateStyle,
    ) -> Option<CopyTicket> {
        self.copy(self.selected, clipboard, date_style)
    }

    /// Clear the copied mark if `ticket` is still the latest copy
    pub fn expire_copy(&mut self, ticket: CopyTicket) -> bool {
        match self.copied {
            Some(mark) if mark.ticket == ticket => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn copied_index(&self) -> Option<usize> {
        self.copied.map(|mark| mark.index)
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied_index() == Some(index)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection & scrolling
    // ─────────────────────────────────────────────────────────────────────

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection in a grid with `columns` cards per row
    pub fn move_selection(&mut self, movement: Movement, columns: usize) {
        let total = self.records().len();
        if total == 0 {
            return;
        }
        let last = total - 1;
        let columns = columns.max(1);

        self.selected = match movement {
            Movement::Left => self.selected.saturating_sub(1),
            Movement::Right => (self.selected + 1).min(last),
            Movement::Up => self.selected.checked_sub(columns).unwrap_or(self.selected),
            // A short last row still catches moves from the row above it
            Movement::Down => {
                if self.selected / columns < last / columns {
                    (self.selected + columns).min(last)
                } else {
                    self.selected
                }
            }
            Movement::First => 0,
            Movement::Last => last,
        };
    }

    /// Adjust scrolling so the selected row is among `visible_rows`;
    /// returns the first row to draw
    pub fn scroll_to_selection(&mut self, columns: usize, visible_rows: usize) -> usize {
        let row = self.selected / columns.max(1);
        let visible_rows = visible_rows.max(1);

        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
        self.scroll_row
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}
