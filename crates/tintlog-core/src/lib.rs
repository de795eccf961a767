//! tintlog core library
//!
//! Colorized, leveled console logging plus per-identifier in-memory history.
//!
//! ## Overview
//!
//! Two independent pieces share one level/color table:
//!
//! - [`console`]: a static façade. `console::warn(&args)` prints
//!   `[WARN][2:05:09 PM] ...` to stderr and keeps nothing.
//! - [`InstanceLogger`]: writes nothing to the console. Each call appends a
//!   [`LogEntry`] to the history of the logger's identifier, readable back with
//!   [`InstanceLogger::get`].
//!
//! Histories live in a [`LogHistory`]. Loggers built with
//! [`InstanceLogger::new`] share the process-wide one; pass your own to
//! [`InstanceLogger::with_history`] to keep state isolated.
//!
//! ## Quick Start
//!
//! ```
//! use tintlog_core::{args, console, InstanceLogger, LogHistory};
//!
//! # fn main() -> Result<(), tintlog_core::LogError> {
//! console::info(&args!["listening on", 8080]?);
//!
//! let logger = InstanceLogger::with_history("session-1", LogHistory::new());
//! logger.info(&args!["x", 1]?);
//!
//! let entries = logger.get().unwrap();
//! assert_eq!(entries[0].message(), "x 1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Arguments
//!
//! Every operation takes `&[Value]`. Build the list from any `Serialize`
//! values with [`args!`]; a value that cannot be represented (e.g. a map with
//! non-string keys) yields [`LogError::Render`] before anything is logged.

pub mod console;
pub mod entry;
pub mod error;
pub mod history;
pub mod instance;
pub mod layer;
pub mod level;
pub mod render;

// Re-exports
pub use console::{Channel, Console, ConsoleWriter, StdConsole};
pub use entry::LogEntry;
pub use error::{LogError, LogResult};
pub use history::LogHistory;
pub use instance::InstanceLogger;
pub use layer::HistoryLayer;
pub use level::{LogLevel, ParseLevelError};
pub use serde_json::Value;
