//! Cluster Error Types

use thiserror::Error;

/// Result type alias for cluster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cluster error types
#[derive(Error, Debug)]
pub enum Error {
    // Precondition errors
    #[error("Mismatched secondary count: expected {expected}, got {actual}")]
    MismatchedSecondaryCount { expected: usize, actual: usize },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Codec errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid TOML: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Encoded TOML is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is a caller precondition violation rather than
    /// a decoding or I/O failure
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::MismatchedSecondaryCount { .. })
    }

    /// Check if this error came from encoding or decoding a payload
    pub fn is_codec(&self) -> bool {
        matches!(
            self,
            Error::Json(_)
                | Error::Bincode(_)
                | Error::TomlDe(_)
                | Error::TomlSer(_)
                | Error::Utf8(_)
        )
    }
}
