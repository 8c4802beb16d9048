//! Error types and Result aliases for cll
//!
//! Errors here never cross the dispatch boundary: the dispatcher turns them
//! into failed [`CommandResult`](crate::models::CommandResult)s. They surface
//! directly only from configuration loading, persistence and the back-ends.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for cll operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cll
#[derive(Debug)]
pub enum Error {
    // === Command errors ===
    /// Failed to spawn a child process
    CommandSpawnFailed {
        command: String,
        reason: String,
    },

    /// Child process exceeded its time budget
    CommandTimeout {
        command: String,
        duration: Duration,
    },

    /// Empty command
    EmptyCommand,

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to save configuration file
    ConfigSaveFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration directory could not be determined
    ConfigDirUnavailable,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Command errors
            Error::CommandSpawnFailed { command, reason } => {
                write!(f, "Failed to execute command '{}': {}", command, reason)
            }
            Error::CommandTimeout { command, duration } => {
                write!(f, "Command '{}' timed out after {:?}", command, duration)
            }
            Error::EmptyCommand => {
                write!(f, "Command cannot be empty")
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigSaveFailed { path, reason } => {
                write!(f, "Failed to save config to '{}': {}", path.display(), reason)
            }
            Error::ConfigDirUnavailable => {
                write!(f, "Could not determine configuration directory")
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Serde(err) => Some(err),
            Error::Toml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
