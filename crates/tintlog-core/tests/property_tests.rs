//! Property-based tests for instance histories
//!
//! Uses proptest to verify ordering and isolation of per-identifier histories.

use proptest::prelude::*;
use serde_json::json;
use tintlog_core::{InstanceLogger, LogHistory, LogLevel};

// ============================================================================
// Strategy Generators
// ============================================================================

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{0,20}").expect("valid regex")
}

/// Writes as (use second logger?, level, message)
fn writes_strategy(max: usize) -> impl Strategy<Value = Vec<(bool, LogLevel, String)>> {
    prop::collection::vec((any::<bool>(), level_strategy(), message_strategy()), 0..max)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N calls produce exactly N entries, in call order
    #[test]
    fn n_calls_give_n_entries_in_order(
        writes in prop::collection::vec((level_strategy(), message_strategy()), 1..50)
    ) {
        let logger = InstanceLogger::with_history("a", LogHistory::new());

        for (level, msg) in &writes {
            logger.record(*level, &[json!(msg)]);
        }

        let entries = logger.get().unwrap();
        prop_assert_eq!(entries.len(), writes.len());
        for (entry, (level, msg)) in entries.iter().zip(&writes) {
            prop_assert_eq!(entry.level(), *level);
            prop_assert_eq!(entry.message(), msg.as_str());
        }
    }

    /// Interleaved writes to two identifiers never leak across
    #[test]
    fn identifiers_are_isolated(writes in writes_strategy(40)) {
        let history = LogHistory::new();
        let a = InstanceLogger::with_history("a", history.clone());
        let b = InstanceLogger::with_history("b", history);

        for (to_b, level, msg) in &writes {
            let target = if *to_b { &b } else { &a };
            target.record(*level, &[json!(format!("{}:{}", target.id(), msg))]);
        }

        let expected_a = writes.iter().filter(|(to_b, _, _)| !to_b).count();
        let expected_b = writes.len() - expected_a;

        let a_entries = a.get().unwrap_or_default();
        let b_entries = b.get().unwrap_or_default();
        prop_assert_eq!(a_entries.len(), expected_a);
        prop_assert_eq!(b_entries.len(), expected_b);
        prop_assert!(a_entries.iter().all(|e| e.message().starts_with("a:")));
        prop_assert!(b_entries.iter().all(|e| e.message().starts_with("b:")));
    }

    /// Any number of loggers on one identifier see one shared sequence
    #[test]
    fn same_identifier_shares_sequence(
        count in 1usize..5,
        msgs in prop::collection::vec(message_strategy(), 1..30)
    ) {
        let history = LogHistory::new();
        let loggers: Vec<_> = (0..count)
            .map(|_| InstanceLogger::with_history("shared", history.clone()))
            .collect();

        for (i, msg) in msgs.iter().enumerate() {
            loggers[i % count].info(&[json!(msg)]);
        }

        for logger in &loggers {
            let seen: Vec<_> = logger
                .get()
                .unwrap()
                .iter()
                .map(|e| e.message().to_string())
                .collect();
            prop_assert_eq!(&seen, &msgs);
        }
    }
}
