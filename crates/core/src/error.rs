//! Error types for the editor.

use thiserror::Error;

/// Main error type for the editor.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration values that fail validation
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration files that are not valid TOML
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the editor's Error type.
pub type Result<T> = std::result::Result<T, Error>;
