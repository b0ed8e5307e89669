//! Error types for the viewport boundary.

use editor_scene::SceneError;
use thiserror::Error;

/// Error type for asset loading, reported by an [`AssetLoader`](crate::AssetLoader).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// Nothing exists at the locator.
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The locator names a format the loader cannot read.
    #[error("Unsupported asset format: {0}")]
    Unsupported(String),

    /// The asset exists but could not be decoded.
    #[error("Failed to load asset '{locator}': {message}")]
    Load {
        /// Locator that failed to load.
        locator: String,
        /// Error message.
        message: String,
    },
}

/// Error type for per-frame viewport work.
#[derive(Error, Debug)]
pub enum ViewportError {
    /// The active camera could not produce valid matrices.
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// The renderer rejected a frame.
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for viewport operations.
pub type ViewportResult<T> = Result<T, ViewportError>;
