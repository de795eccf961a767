//! Error types for tintlog

use thiserror::Error;

/// Errors raised while preparing values for logging.
///
/// Logging calls themselves never fail. The only fallible step is turning a
/// caller value into a [`serde_json::Value`], which happens before the call.
#[derive(Error, Debug)]
pub enum LogError {
    /// A value could not be converted into a loggable form
    /// (e.g. a map with non-string keys, or a failing `Serialize` impl)
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for tintlog operations
pub type LogResult<T> = Result<T, LogError>;
