//! Log entry stored in an instance history.

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

use crate::level::LogLevel;
use crate::render;

/// Date and time format used for entry timestamps, e.g. `3/7/2026, 2:05:09 PM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time-only format used by the console tag, e.g. `2:05:09 PM`.
pub const TIME_FORMAT: &str = "%-I:%M:%S %p";

/// A single retained log entry.
///
/// Entries are immutable once built; fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
    timestamp: String,
}

impl LogEntry {
    /// Create an entry from already-converted arguments, stamped with the
    /// current local time.
    pub fn new(level: LogLevel, args: &[Value]) -> Self {
        Self::at(level, args, Local::now())
    }

    /// Create an entry with an explicit creation time.
    pub fn at(level: LogLevel, args: &[Value], when: DateTime<Local>) -> Self {
        Self {
            level,
            message: render::message_text(args),
            timestamp: when.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
