//! Rendering of log arguments.
//!
//! Every logging operation takes an ordered list of [`Value`]s. Two renderings
//! exist:
//!
//! - **console**: what a console prints for several values at once. Text is
//!   printed verbatim, scalars as their literal, arrays and objects as compact
//!   JSON.
//! - **message**: what gets stored in a [`crate::LogEntry`]. Same as console
//!   for text and scalars, but arrays and objects are pretty-printed with a
//!   2-space indent.
//!
//! In both cases the rendered values are joined with a single space.

use serde::Serialize;
use serde_json::Value;

use crate::error::LogResult;

/// Convert any serializable value into a loggable [`Value`].
///
/// This is the only fallible step in the logging path.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> LogResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Build a `Result<Vec<Value>, LogError>` from heterogeneous serializable
/// arguments.
///
/// ```
/// use tintlog_core::{args, LogHistory, InstanceLogger};
///
/// # fn main() -> Result<(), tintlog_core::LogError> {
/// let logger = InstanceLogger::with_history("doc", LogHistory::new());
/// logger.info(&args!["x", 1]?);
/// assert_eq!(logger.get().unwrap()[0].message(), "x 1");
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        (|| -> $crate::LogResult<::std::vec::Vec<$crate::Value>> {
            ::std::result::Result::Ok(::std::vec![$($crate::render::to_value(&$arg)?),*])
        })()
    };
}

/// Render values the way a console prints them side by side.
pub fn console_text(args: &[Value]) -> String {
    join(args, |value| value.to_string())
}

/// Render values into the message text of a stored entry.
pub fn message_text(args: &[Value]) -> String {
    join(args, |value| format!("{:#}", value))
}

fn join(args: &[Value], structured: impl Fn(&Value) -> String) -> String {
    args.iter()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => structured(value),
            scalar => scalar.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogError;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_text_is_verbatim() {
        let args = vec![json!("hello \"world\"")];
        assert_eq!(message_text(&args), "hello \"world\"");
        assert_eq!(console_text(&args), "hello \"world\"");
    }

    #[test]
    fn test_scalars_joined_by_space() {
        let args = vec![json!("x"), json!(1), json!(2.5), json!(true), json!(null)];
        assert_eq!(message_text(&args), "x 1 2.5 true null");
        assert_eq!(console_text(&args), "x 1 2.5 true null");
    }

    #[test]
    fn test_structured_message_is_indented() {
        let args = vec![json!({"a": 1}), json!([1, 2])];
        assert_eq!(message_text(&args), "{\n  \"a\": 1\n} [\n  1,\n  2\n]");
    }

    #[test]
    fn test_structured_console_is_compact() {
        let args = vec![json!("state"), json!({"a": [1, 2]})];
        assert_eq!(console_text(&args), "state {\"a\":[1,2]}");
    }

    #[test]
    fn test_empty_args() {
        assert_eq!(message_text(&[]), "");
        assert_eq!(console_text(&[]), "");
    }

    #[test]
    fn test_args_macro() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let values = crate::args!["p", Point { x: 1, y: 2 }, 3u8].unwrap();
        assert_eq!(values, vec![json!("p"), json!({"x": 1, "y": 2}), json!(3)]);

        let empty = crate::args![].unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_args_macro_reports_unconvertible_value() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "non-string key");

        let result = crate::args!["ok", map];
        assert!(matches!(result, Err(LogError::Render(_))));
    }
}
