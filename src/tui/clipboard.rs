//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Destination for copied user details
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard
///
/// The handle is opened on first use and kept: on X11 the copied text is
/// served by the process that owns the handle, so dropping it right after
/// `set_text` can lose the content.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to access clipboard")?,
        };

        // On failure the handle is dropped so the next attempt reconnects
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        self.handle = Some(clipboard);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ClipboardWriter;
    use anyhow::{bail, Result};
    use std::sync::{Arc, Mutex};

    /// In-memory clipboard; clones share the same history
    #[derive(Clone, Default)]
    pub struct MemoryClipboard {
        pub written: Arc<Mutex<Vec<String>>>,
        pub fail: Arc<Mutex<bool>>,
    }

    impl MemoryClipboard {
        pub fn set_failing(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        pub fn history(&self) -> Vec<String> {
            self.written.lock().unwrap().clone()
        }
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if *self.fail.lock().unwrap() {
                bail!("clipboard unavailable");
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
