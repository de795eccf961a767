//! Log levels and their console colors.

use std::fmt;
use std::str::FromStr;

use colored::{Color, ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Severity/category of a log line.
///
/// Levels mirror the familiar console API names, so `Log` sits between
/// `Debug` and `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

/// Display color of each level, in declaration order.
pub const LEVEL_COLORS: [(LogLevel, Color); 5] = [
    (LogLevel::Debug, Color::White),
    (LogLevel::Log, Color::Blue),
    (LogLevel::Info, Color::Green),
    (LogLevel::Warn, Color::Yellow),
    (LogLevel::Error, Color::Red),
];

impl LogLevel {
    /// All levels, in declaration order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Log,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name, as stored in [`crate::LogEntry`].
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Log => "log",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Console color for this level.
    pub fn color(&self) -> Color {
        LEVEL_COLORS[*self as usize].1
    }

    /// Uncolored tag text, e.g. `[WARN]`.
    pub fn tag_text(&self) -> String {
        format!("[{}]", self.as_str().to_uppercase())
    }

    /// Tag in the level's color. Whether escape codes are actually emitted is
    /// decided by `colored` (terminal detection, `NO_COLOR`, `CLICOLOR`).
    pub fn tag(&self) -> ColoredString {
        self.tag_text().color(self.color())
    }

    /// Whether console output for this level goes to stderr.
    pub fn is_stderr(&self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log level '{0}'. Must be one of: debug, log, info, warn, error")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "log" => Ok(LogLevel::Log),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_table() {
        assert_eq!(LogLevel::Debug.color(), Color::White);
        assert_eq!(LogLevel::Log.color(), Color::Blue);
        assert_eq!(LogLevel::Info.color(), Color::Green);
        assert_eq!(LogLevel::Warn.color(), Color::Yellow);
        assert_eq!(LogLevel::Error.color(), Color::Red);
    }

    #[test]
    fn test_color_table_matches_declaration_order() {
        for (i, (level, _)) in LEVEL_COLORS.iter().enumerate() {
            assert_eq!(*level as usize, i);
            assert_eq!(LogLevel::ALL[i], *level);
        }
    }

    #[test]
    fn test_tag_text_is_uppercased() {
        assert_eq!(LogLevel::Debug.tag_text(), "[DEBUG]");
        assert_eq!(LogLevel::Log.tag_text(), "[LOG]");
        assert_eq!(LogLevel::Info.tag_text(), "[INFO]");
        assert_eq!(LogLevel::Warn.tag_text(), "[WARN]");
        assert_eq!(LogLevel::Error.tag_text(), "[ERROR]");
    }

    #[test]
    fn test_channels() {
        assert!(!LogLevel::Debug.is_stderr());
        assert!(!LogLevel::Log.is_stderr());
        assert!(!LogLevel::Info.is_stderr());
        assert!(LogLevel::Warn.is_stderr());
        assert!(LogLevel::Error.is_stderr());
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("LOG".parse::<LogLevel>(), Ok(LogLevel::Log));
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Info).unwrap(), "\"info\"");
        let level: LogLevel = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }
}
