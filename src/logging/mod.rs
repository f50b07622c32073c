// Logging module - subscriber setup and in-memory log capture
//
// In TUI mode log events are captured into a ring buffer and shown in the
// logs panel instead of being written to the terminal, which would garble the
// alternate screen. Headless commands log to stderr. Either mode can add a
// JSON file layer.

use crate::config::{LogRotation, LoggingConfig};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{Level, Metadata, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    /// Get the display string for this log level
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    /// Create a new log buffer
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    // A panic while holding the lock can't leave the deque half-written,
    // so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a log entry to the buffer
    /// If the buffer is full, removes the oldest entry
    pub fn add(&self, entry: LogEntry) {
        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The most recent `n` entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let entries = self.lock();
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Custom tracing layer that captures logs to a buffer
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::from(metadata.level()),
            target: metadata.target().to_string(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at subscriber level
        true
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl<'a> tracing::field::Visit for MessageVisitor<'a> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            // format_args! messages arrive here; their Debug output is unquoted
            *self.0 = format!("{:?}", value);
        }
    }
}

/// Where console-bound log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Capture into the TUI log buffer
    Tui,
    /// Human-readable lines on stderr (headless commands)
    Stderr,
}

/// Install the global subscriber
///
/// Precedence for the filter: RUST_LOG > config level. The returned guard
/// must be held until exit so buffered file writes are flushed.
pub fn init(config: &LoggingConfig, target: LogTarget, buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("randusers={}", config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = (target == LogTarget::Tui).then(|| TuiLogLayer::new(buffer.clone()));
    let stderr_layer = (target == LogTarget::Stderr)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // File layer uses JSON format for structured log parsing
    let mut file_error = None;
    let (file_layer, guard) = if config.file_enabled {
        match std::fs::create_dir_all(&config.file_dir) {
            Ok(()) => {
                let appender = match config.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&config.file_dir, &config.file_prefix)
                    }
                };
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                file_error = Some(e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(
            "Could not create log directory {}: {}",
            config.file_dir.display(),
            e
        );
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            target: "randusers".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn buffer_drops_oldest_when_full() {
        let buffer = LogBuffer::with_capacity(3);
        for i in 0..5 {
            buffer.add(entry(&format!("line {}", i)));
        }

        let messages: Vec<_> = buffer.recent(10).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let buffer = LogBuffer::new();
        for i in 0..4 {
            buffer.add(entry(&format!("line {}", i)));
        }

        let messages: Vec<_> = buffer.recent(2).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3"]);
        assert_eq!(buffer.recent(usize::MAX).len(), 4);
    }

    #[test]
    fn layer_captures_level_target_and_message() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "randusers::tui", "Failed to copy user {}", 3);
            tracing::info!("plain message");
        });

        let entries = buffer.recent(10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].target, "randusers::tui");
        assert_eq!(entries[0].message, "Failed to copy user 3");
        assert_eq!(entries[1].level.as_str(), "INFO");
        assert_eq!(entries[1].message, "plain message");
    }
}
