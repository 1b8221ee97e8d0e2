//! Error types and Result aliases for tabssh

use std::fmt;
use std::path::PathBuf;

/// Result type alias for tabssh operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tabssh
#[derive(Debug)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    // === Credential prompt errors ===
    /// The user dismissed the password dialog, or it produced no password
    PromptCancelled,

    /// The password dialog could not be started
    PromptFailed {
        reason: String,
    },

    // === Launch errors ===
    /// The terminal process could not be spawned
    SpawnFailed {
        command: String,
        reason: String,
    },

    /// Required external binaries are not on the search path
    MissingDependencies {
        binaries: Vec<String>,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    /// JSON serialization errors
    Serde(serde_json::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::PromptCancelled => {
                write!(f, "Password prompt was cancelled")
            }
            Error::PromptFailed { reason } => {
                write!(f, "Failed to run password prompt: {}", reason)
            }
            Error::SpawnFailed { command, reason } => {
                write!(f, "Failed to spawn terminal '{}': {}", command, reason)
            }
            Error::MissingDependencies { binaries } => {
                write!(f, "Missing required binaries: {}", binaries.join(", "))
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
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
