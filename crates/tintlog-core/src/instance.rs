//! Per-identifier logger that retains entries instead of printing them.

use serde_json::Value;

use crate::entry::LogEntry;
use crate::history::LogHistory;
use crate::level::LogLevel;

/// Logger bound to one identifier.
///
/// Every call renders its arguments into a [`LogEntry`] and appends it to the
/// identifier's sequence in the backing [`LogHistory`]. Nothing is written to
/// the console. Two loggers with the same identifier on the same history read
/// and write the same sequence.
///
/// # Example
///
/// ```
/// use tintlog_core::{args, InstanceLogger, LogHistory, LogLevel};
///
/// # fn main() -> Result<(), tintlog_core::LogError> {
/// let history = LogHistory::new();
/// let writer = InstanceLogger::with_history("job-42", history.clone());
/// let reader = InstanceLogger::with_history("job-42", history);
///
/// assert!(reader.get().is_none());
/// writer.warn(&args!["retrying", 3]?);
///
/// let entries = reader.get().unwrap();
/// assert_eq!(entries[0].level(), LogLevel::Warn);
/// assert_eq!(entries[0].message(), "retrying 3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InstanceLogger {
    id: String,
    history: LogHistory,
}

impl InstanceLogger {
    /// Create a logger writing to the process-wide history.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_history(id, LogHistory::global().clone())
    }

    /// Create a logger writing to the given history.
    pub fn with_history(id: impl Into<String>, history: LogHistory) -> Self {
        Self {
            id: id.into(),
            history,
        }
    }

    /// The identifier this logger writes under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entries written under this logger's identifier, oldest first.
    ///
    /// `None` until the first entry is written for the identifier.
    pub fn get(&self) -> Option<Vec<LogEntry>> {
        self.history.get(&self.id)
    }

    /// Record an entry at `level`.
    pub fn record(&self, level: LogLevel, args: &[Value]) {
        self.history.append(&self.id, LogEntry::new(level, args));
    }

    pub fn debug(&self, args: &[Value]) {
        self.record(LogLevel::Debug, args);
    }

    pub fn log(&self, args: &[Value]) {
        self.record(LogLevel::Log, args);
    }

    pub fn info(&self, args: &[Value]) {
        self.record(LogLevel::Info, args);
    }

    pub fn warn(&self, args: &[Value]) {
        self.record(LogLevel::Warn, args);
    }

    pub fn error(&self, args: &[Value]) {
        self.record(LogLevel::Error, args);
    }
}
