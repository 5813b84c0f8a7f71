//! Error types and handling for the CLI
//!
//! Hard errors from the core or the fetch layer all surface here and map to
//! a non-zero process exit; the core library itself never exits or prints.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from kompat-core (decode or validation failures)
    #[error(transparent)]
    Core(#[from] kompat_core::Error),

    /// Source unreadable over the network
    #[error("unable to fetch \"{source_name}\": {message}")]
    Fetch { source_name: String, message: String },

    /// Local source file missing
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a fetch error for a named source
    pub fn fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::Fetch { .. } => 3,
            Self::FileNotFound { .. } => 4,
            Self::Config(_) => 5,
            Self::Json(_) => 6,
            Self::Yaml(_) => 7,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
