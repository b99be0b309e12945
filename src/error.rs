// File: ./src/error.rs
//! User-facing error taxonomy for the command boundary.
//!
//! Every variant renders a recoverable, user-facing message: one bad command
//! never ends the session. Filesystem plumbing below this layer uses
//! `anyhow` and is wrapped into `Io` at the session boundary.

use std::fmt;

#[derive(Debug)]
pub enum TallyError {
    /// Input matched no known command keyword.
    UnknownCommand,
    /// Required token/structure missing (`/by`, `/from`, `/to`, or token order).
    Format(String),
    /// Required field present but empty after trimming.
    Validation(String),
    /// Index or priority argument is not a well-formed positive integer.
    Parse(String),
    /// Numeric index outside the collection bounds. `size` is the current
    /// collection size so the message can state the valid 1-based range.
    Range { size: usize },
    /// Deadline date matched none of the accepted formats.
    Date(String),
    /// Filesystem failure during load/save. Surfaced as a warning; the
    /// in-memory collection is preserved.
    Io(anyhow::Error),
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TallyError::UnknownCommand => {
                write!(f, "I'm sorry, but I don't know what that means :-(")
            }
            TallyError::Format(msg) | TallyError::Validation(msg) | TallyError::Parse(msg) => {
                write!(f, "{}", msg)
            }
            TallyError::Range { size } => write!(
                f,
                "Invalid task number. Please enter a number between 1 and {}",
                size
            ),
            TallyError::Date(raw) => write!(
                f,
                "Invalid date '{}'. Use yyyy-MM-dd, d/M/yyyy or d-M-yyyy.",
                raw
            ),
            TallyError::Io(e) => write!(f, "Warning: {}", e),
        }
    }
}

impl std::error::Error for TallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TallyError::Io(e) => e.source(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for TallyError {
    fn from(e: anyhow::Error) -> Self {
        TallyError::Io(e)
    }
}
