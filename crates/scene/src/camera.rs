//! Camera node payload.

use glam::Mat4;

use crate::error::{SceneError, SceneResult};
use crate::math;

/// Projection type for the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    #[default]
    Perspective,
    /// Parallel projection; the field of view is read as the vertical view size.
    Orthogonal,
}

/// Camera-specific node data.
///
/// The active flag is owned by the scene graph, which keeps at most one
/// camera active at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    fov: f32,
    near: f32,
    far: f32,
    /// Projection settings
    pub projection: ProjectionKind,
    active: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 0.1,
            far: 100.0,
            projection: ProjectionKind::Perspective,
            active: false,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field of view in degrees (view size for orthogonal cameras).
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Set the field of view in degrees.
    ///
    /// Any positive value is stored. Perspective projection additionally
    /// requires it to stay below 180 and reports that when the matrix is
    /// built.
    pub fn set_fov(&mut self, fov: f32) -> SceneResult<()> {
        if !(fov > 0.0) || !fov.is_finite() {
            return Err(SceneError::invalid_range(
                "fov",
                format!("{fov} must be positive"),
            ));
        }
        self.fov = fov;
        Ok(())
    }

    /// Set both clip planes at once so the pair is validated together.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> SceneResult<()> {
        math::validate_clip_planes(near, far)?;
        self.near = near;
        self.far = far;
        Ok(())
    }

    /// Get the projection matrix for a viewport with the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> SceneResult<Mat4> {
        match self.projection {
            ProjectionKind::Perspective => math::perspective(self.fov, aspect, self.near, self.far),
            ProjectionKind::Orthogonal => {
                let half_height = self.fov / 2.0;
                let half_width = half_height * aspect;
                math::orthographic(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }
}
