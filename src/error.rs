//! Error types for hello-remote

use thiserror::Error;

/// Everything that can end a session early.
///
/// The `Display` text of the input variants is exactly the line printed to
/// the user before the session stops.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Error: Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Error: Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Invalid operation.")]
    UnknownOperation(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SessionError {
    /// True for errors caused by what the user typed, as opposed to a broken stream.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SessionError::IoError(_))
    }

    /// Short stable name of the error, safe to log without user text.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SessionError::InvalidNumber(_) => "invalid_number",
            SessionError::DivisionByZero => "division_by_zero",
            SessionError::UnknownOperation(_) => "unknown_operation",
            SessionError::IoError(_) => "io",
        }
    }

    /// Process exit code used when `--strict-exit` is set.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::IoError(_) => 1,
            SessionError::InvalidNumber(_) => 2,
            SessionError::DivisionByZero => 3,
            SessionError::UnknownOperation(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
