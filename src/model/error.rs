//! Error types for the bubblecell application.
//!
//! The layout engine itself has no recoverable errors: an out-of-range index
//! or an unsized message kind is a caller bug and panics. The types here
//! cover the application shell around it.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`] - Settings file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - [`InputError`] - Conversation file missing, unreadable or malformed
//!   - `std::io::Error` - Terminal setup or rendering failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All variants are fatal: the demo reports them on stderr and exits.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Conversation input could not be loaded.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading a conversation file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The conversation file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use bubblecell::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file is not a valid conversation document.
    ///
    /// Covers JSON syntax errors, schema violations such as an empty sender
    /// id, and message kinds the layout has no sizer for.
    #[error("Invalid conversation in {path}: {message}")]
    InvalidConversation {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// Generic I/O error reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn input_error_invalid_conversation_display() {
        let err = InputError::InvalidConversation {
            path: PathBuf::from("chat.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("chat.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn app_error_from_input_error() {
        let input_err = InputError::FileNotFound {
            path: PathBuf::from("x.json"),
        };
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("x.json"));
    }

    #[test]
    fn app_error_from_config_error() {
        let app_err: AppError = ConfigError::InvalidPath("bad".into()).into();
        assert!(app_err.to_string().contains("Failed to load configuration"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }
}
