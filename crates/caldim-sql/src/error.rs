//! Error types for statement rendering and output.

use std::path::PathBuf;

use caldim_core::CalendarError;
use thiserror::Error;

/// Errors that can occur while building or writing an `INSERT` statement.
#[derive(Debug, Error)]
pub enum SqlError {
    /// Table name is not a plain or schema-qualified SQL identifier.
    #[error("invalid table name: {name:?}")]
    InvalidTableName { name: String },

    /// Year has no four-digit `YYYY-MM-DD` literal in the standard layout.
    #[error("year {year} cannot be written as a YYYY-MM-DD date literal (supported years: 1-9999)")]
    UnsupportedYear { year: i32 },

    /// Year range could not be generated.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// File I/O error.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not replace the destination.
    #[error("failed to replace {target_path} with {temp_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SqlError>;
