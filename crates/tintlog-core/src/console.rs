//! Static console façade.
//!
//! Each call prints one line: the level tag in the level's color, the local
//! time in brackets, one space, then the arguments as a console would show
//! them side by side:
//!
//! ```text
//! [WARN][2:05:09 PM] disk almost full {"free_mb":12}
//! ```
//!
//! `debug`, `log` and `info` go to stdout; `warn` and `error` go to stderr.
//! Nothing is retained.

use std::fmt;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::entry::TIME_FORMAT;
use crate::level::LogLevel;
use crate::render;

/// Output channel of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

impl Channel {
    /// Channel a level writes to.
    pub fn for_level(level: LogLevel) -> Self {
        if level.is_stderr() {
            Channel::Stderr
        } else {
            Channel::Stdout
        }
    }
}

/// Destination of formatted console lines.
pub trait ConsoleWriter: Send + Sync {
    /// Write one complete line (without trailing newline) to `channel`.
    fn write_line(&self, channel: Channel, line: fmt::Arguments<'_>);
}

/// Writes to the process's stdout and stderr.
///
/// A failed write panics, as `println!`/`eprintln!` do.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl ConsoleWriter for StdConsole {
    fn write_line(&self, channel: Channel, line: fmt::Arguments<'_>) {
        match channel {
            Channel::Stdout => println!("{}", line),
            Channel::Stderr => eprintln!("{}", line),
        }
    }
}

/// Formats and emits leveled lines through a [`ConsoleWriter`].
#[derive(Debug, Clone, Default)]
pub struct Console<W = StdConsole> {
    writer: W,
}

/// Console over the process's standard streams.
pub const STDIO: Console<StdConsole> = Console { writer: StdConsole };

impl<W: ConsoleWriter> Console<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Emit one line at `level`.
    pub fn emit(&self, level: LogLevel, args: &[Value]) {
        self.emit_at(level, args, Local::now());
    }

    fn emit_at(&self, level: LogLevel, args: &[Value], when: DateTime<Local>) {
        let line = format_line(level, args, when);
        self.writer
            .write_line(Channel::for_level(level), format_args!("{}", line));
    }

    pub fn debug(&self, args: &[Value]) {
        self.emit(LogLevel::Debug, args);
    }

    pub fn log(&self, args: &[Value]) {
        self.emit(LogLevel::Log, args);
    }

    pub fn info(&self, args: &[Value]) {
        self.emit(LogLevel::Info, args);
    }

    pub fn warn(&self, args: &[Value]) {
        self.emit(LogLevel::Warn, args);
    }

    pub fn error(&self, args: &[Value]) {
        self.emit(LogLevel::Error, args);
    }
}

/// Build the full console line for `level` at time `when`.
pub fn format_line(level: LogLevel, args: &[Value], when: DateTime<Local>) -> String {
    format!(
        "{}[{}] {}",
        level.tag(),
        when.format(TIME_FORMAT),
        render::console_text(args)
    )
}

pub fn debug(args: &[Value]) {
    STDIO.debug(args);
}

pub fn log(args: &[Value]) {
    STDIO.log(args);
}

pub fn info(args: &[Value]) {
    STDIO.info(args);
}

pub fn warn(args: &[Value]) {
    STDIO.warn(args);
}

pub fn error(args: &[Value]) {
    STDIO.error(args);
}
