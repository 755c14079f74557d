//! Global error handling for lsfs
//!
//! Every runtime failure of a listing is represented by [`LsFsError`]. Usage
//! errors never reach this type: clap reports them before any work is done.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Global error type for lsfs operations
#[derive(Error, Debug)]
pub enum LsFsError {
    /// The structure document does not exist
    #[error("{} does not exist.", .0.display())]
    MissingStructure(PathBuf),

    /// File system errors while reading the structure document
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Structure document is not well-formed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structure document is JSON but not a usable tree
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// Requested path does not resolve to a node
    #[error("cannot access '{0}': No such file or directory")]
    NotFound(String),

    /// A field required by the long format is absent
    #[error("'{name}' has no {field}")]
    MissingField { name: String, field: &'static str },

    /// Modification time cannot be represented as a date
    #[error("'{name}' has an invalid modification time: {value}")]
    InvalidTimestamp { name: String, value: i64 },
}

impl LsFsError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}

/// Specialized Result type for lsfs operations
pub type Result<T> = std::result::Result<T, LsFsError>;

/// Creates an LsFsError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::LsFsError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
