//! Error types for the kompat core library
//!
//! All hard failures abort the operation that raised them; there is no
//! partial-results mode. The library never terminates the process or writes
//! to output streams itself.

use thiserror::Error;

/// Main error type for parsing and rendering compatibility documents
#[derive(Error, Debug)]
pub enum Error {
    /// A version string is not a parseable semantic version
    #[error("invalid version \"{value}\": {reason}")]
    InvalidVersion { value: String, reason: String },

    /// A range minimum sorts after its maximum within the same major line
    #[error("range minimum \"{min}\" is greater than maximum \"{max}\"")]
    InvertedRange { min: String, max: String },

    /// Malformed YAML in a source document
    #[error("unable to decode \"{source_name}\": {source}")]
    Decode {
        source_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A version field failed validation after wildcard normalization
    #[error("unable to parse compatibility for \"{app_name}\": {field} \"{value}\" is invalid: {source}")]
    Validation {
        app_name: String,
        field: String,
        value: String,
        #[source]
        source: Box<Error>,
    },

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding failed
    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-version error
    pub fn invalid_version(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
