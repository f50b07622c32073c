// Input form state - the bounded count field
//
// The field only ever holds "" or a decimal string in 1..=500. Edits that
// would leave it anywhere else are dropped, so "non-empty" and "submittable"
// are the same thing.

use crate::users::RequestCount;

/// Longest digit string that can still be in range
const MAX_DIGITS: usize = 3;

#[derive(Debug, Default)]
pub struct InputForm {
    value: String,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field contents
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Submission is disabled while the field is empty
    pub fn can_submit(&self) -> bool {
        !self.value.is_empty()
    }

    /// Append one typed character; returns whether it was accepted
    pub fn push_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        let mut candidate = self.value.clone();
        candidate.push(c);
        self.accept(candidate)
    }

    /// Insert pasted text as a whole, or not at all
    pub fn paste(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        let candidate = format!("{}{}", self.value, text);
        self.accept(candidate)
    }

    /// Remove the last digit
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Take the parsed count and reset the field
    ///
    /// Returns `None` (and leaves the field untouched) when submission is
    /// disabled.
    pub fn submit(&mut self) -> Option<RequestCount> {
        let count = self.value.parse().ok()?;
        self.value.clear();
        Some(count)
    }

    fn accept(&mut self, candidate: String) -> bool {
        if Self::is_valid(&candidate) {
            self.value = candidate;
            true
        } else {
            false
        }
    }

    /// A leading zero is never valid, which also keeps "0" out of the field
    fn is_valid(candidate: &str) -> bool {
        if candidate.len() > MAX_DIGITS || candidate.starts_with('0') {
            return false;
        }
        candidate
            .parse::<u16>()
            .ok()
            .and_then(RequestCount::new)
            .is_some()
    }
}
