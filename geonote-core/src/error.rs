//! Error types for GeoNote.

use thiserror::Error;

/// Errors that can occur in GeoNote operations.
#[derive(Error, Debug)]
pub enum GeoNoteError {
    #[error("Invalid coordinate format: \"{0}\". Example: 41°17'28\"N")]
    InvalidCoordinate(String),

    #[error("Invalid duration '{0}'. Expected something like \"30m\" or \"1h\"")]
    InvalidDuration(String),

    #[error("Event duration '{0}' is too long. The longest allowed is {1} days")]
    DurationTooLong(String, i64),

    #[error("Unknown {kind} '{value}'. Expected {expected}")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for GeoNote operations.
pub type GeoNoteResult<T> = Result<T, GeoNoteError>;
