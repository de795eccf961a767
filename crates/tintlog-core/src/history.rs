//! Shared per-identifier log history.
//!
//! A [`LogHistory`] maps an identifier to the ordered entries written under
//! it. Sequences are created on first write and kept until the history itself
//! is dropped; there is no eviction, cap or clearing.
//!
//! Cloning a `LogHistory` yields another handle to the same store, so any
//! number of loggers can share it. [`LogHistory::global`] is the process-wide
//! store used by [`crate::InstanceLogger::new`]; tests should build their own
//! with [`LogHistory::new`] to stay isolated.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::entry::LogEntry;

static GLOBAL: OnceLock<LogHistory> = OnceLock::new();

/// Keyed, append-only store of log entries.
#[derive(Debug, Clone, Default)]
pub struct LogHistory {
    inner: Arc<RwLock<HashMap<String, Vec<LogEntry>>>>,
}

impl LogHistory {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store, created on first use.
    pub fn global() -> &'static LogHistory {
        GLOBAL.get_or_init(LogHistory::new)
    }

    /// Append an entry to `id`'s sequence, creating the sequence if needed.
    pub fn append(&self, id: &str, entry: LogEntry) {
        let created = {
            let mut map = self.inner.write();
            match map.get_mut(id) {
                Some(entries) => {
                    entries.push(entry);
                    false
                }
                None => {
                    map.insert(id.to_string(), vec![entry]);
                    true
                }
            }
        };

        // Emitted after the lock is released; a HistoryLayer may append here.
        if created {
            tracing::trace!(id, "Created log history");
        }
    }

    /// Snapshot of `id`'s entries, oldest first.
    ///
    /// Returns `None` if nothing was ever written under `id`.
    pub fn get(&self, id: &str) -> Option<Vec<LogEntry>> {
        self.inner.read().get(id).cloned()
    }

    /// Number of entries stored under `id` (0 if none).
    pub fn len(&self, id: &str) -> usize {
        self.inner.read().get(id).map_or(0, Vec::len)
    }

    /// Whether a sequence exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains_key(id)
    }

    /// Identifiers that have at least one entry, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.inner.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}
