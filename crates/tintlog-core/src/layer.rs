//! Tracing layer that records events into a [`LogHistory`].
//!
//! Lets code instrumented with `tracing` feed the same per-identifier history
//! that [`crate::InstanceLogger`] writes to.

use std::fmt::Write as FmtWrite;

use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::entry::LogEntry;
use crate::history::LogHistory;
use crate::level::LogLevel;

/// A tracing Layer that appends every event to one identifier's history.
///
/// TRACE and DEBUG events become `debug` entries; INFO, WARN and ERROR keep
/// their name. The entry message is the event's `message` field followed by
/// the other fields as `key=value`.
///
/// ```
/// use tintlog_core::{HistoryLayer, LogHistory};
/// use tracing_subscriber::prelude::*;
///
/// let history = LogHistory::new();
/// let subscriber = tracing_subscriber::registry()
///     .with(HistoryLayer::new("worker", history.clone()));
///
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::warn!(attempt = 2, "retrying");
/// });
///
/// assert_eq!(history.get("worker").unwrap()[0].message(), "retrying attempt=2");
/// ```
#[derive(Debug, Clone)]
pub struct HistoryLayer {
    id: String,
    history: LogHistory,
}

impl HistoryLayer {
    pub fn new(id: impl Into<String>, history: LogHistory) -> Self {
        Self {
            id: id.into(),
            history,
        }
    }

    /// Identifier the captured events are stored under.
    pub fn id(&self) -> &str {
        &self.id
    }
}

fn map_level(level: &Level) -> LogLevel {
    match *level {
        Level::ERROR => LogLevel::Error,
        Level::WARN => LogLevel::Warn,
        Level::INFO => LogLevel::Info,
        // TRACE and DEBUG
        _ => LogLevel::Debug,
    }
}

impl<S: Subscriber> Layer<S> for HistoryLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let level = map_level(event.metadata().level());
        let text = Value::String(visitor.into_text());
        self.history.append(&self.id, LogEntry::new(level, &[text]));
    }
}

/// Collects the message and `key=value` pairs of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn into_text(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        parts.extend(self.message);
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields.push(format!("{}={}", field.name(), buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}
