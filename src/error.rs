//! Error handling.
//!
//! This module provides a custom error type for the project.

use colored::*;
use std::fmt;

/// Result type alias for the generator application.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Main error type for the generator application.
#[derive(Debug)]
pub enum GenerateError {
    /// Invalid line constant.
    /// This allows you to store a more detailed message explaining why the line was rejected.
    InvalidLine(String),

    /// Output file could not be created or opened.
    FileAccessError { path: String, reason: String },

    /// IO error during the write loop.
    IoError(std::io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg: String;
        match self {
            GenerateError::InvalidLine(msg) => {
                warn_msg = format!("Invalid line: {}", msg);
            }
            GenerateError::FileAccessError { path, reason } => {
                warn_msg = format!("File access error: Path: {}\n Reason: {}", path, reason);
            }
            GenerateError::IoError(err) => {
                warn_msg = format!("IO error: {}", err);
            }
        }
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        GenerateError::IoError(err)
    }
}

impl GenerateError {
    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        GenerateError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            GenerateError::FileAccessError { .. } => {
                Some("Check directory permissions and free disk space, then try again.".to_string())
            }
            GenerateError::IoError(..) => {
                Some("Check free disk space and try again.".to_string())
            }
            _ => None,
        }
    }
}
