// src/error.rs

//! Error types for the os-release library
//!
//! Parsing itself never fails. These errors come from the layers around it:
//! locating and reading the file, loading configuration, and deriving
//! artifact names from a record that lacks identification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced outside the pure parser
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a file failed
    #[error("Failed to read {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the searched paths exists
    #[error("No os-release file found (searched: {0})")]
    NotFoundError(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Record is missing ID or VERSION_ID
    #[error("Failed to identify operating system: missing {0}")]
    NotIdentified(&'static str),
}

/// Result type for os-release operations
pub type Result<T> = std::result::Result<T, Error>;
