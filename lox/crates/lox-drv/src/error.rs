//! Error handling for the lox driver.
//!
//! Lexical errors are not driver errors: they go to the session's
//! [`Handler`](lox_util::Handler) and only change the exit status. The
//! variants here are the failures that stop the driver itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for input that failed to scan (`EX_DATAERR`).
pub const EXIT_DATA_ERR: u8 = 65;
/// Exit status for a script that cannot be opened (`EX_NOINPUT`).
pub const EXIT_NO_INPUT: u8 = 66;
/// Exit status for an internal failure (`EX_SOFTWARE`).
pub const EXIT_SOFTWARE: u8 = 70;
/// Exit status for a failed read or write (`EX_IOERR`).
pub const EXIT_IO_ERR: u8 = 74;
/// Exit status for a bad configuration file (`EX_CONFIG`).
pub const EXIT_CONFIG: u8 = 78;

/// Main error type for the lox driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The script could not be read.
    #[error("could not read {}: {source}", .path.display())]
    ReadSource {
        /// Path of the script
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Reading the prompt or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Token serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::ReadSource { .. } => EXIT_NO_INPUT,
            DriverError::Config(_) => EXIT_CONFIG,
            DriverError::Logging(_) => EXIT_SOFTWARE,
            DriverError::Io(_) | DriverError::Json(_) => EXIT_IO_ERR,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
