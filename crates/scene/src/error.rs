//! Error types for scene math and node validation.

use glam::Vec3;
use thiserror::Error;

/// Error type for scene operations that would otherwise produce a corrupt
/// matrix or transform.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A value lies outside the range its consumer can handle.
    #[error("Invalid range for {name}: {detail}")]
    InvalidRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        detail: String,
    },

    /// Eye and target coincide, so no view direction exists.
    #[error("Look-at basis is degenerate: eye and target coincide")]
    DegenerateBasis,

    /// A scale with a zero component collapses the transform.
    #[error("Scale has a zero component: {0}")]
    ZeroScale(Vec3),

    /// A rotation that cannot be normalized.
    #[error("Rotation quaternion has zero length or is not finite")]
    DegenerateRotation,
}

impl SceneError {
    pub(crate) fn invalid_range(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidRange {
            name,
            detail: detail.into(),
        }
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
