//! Transform component for scene nodes.
//!
//! This module provides the [`Transform`] struct for representing position,
//! rotation, and scale of scene nodes. The rotation is always kept
//! normalized and the scale never has a zero component; setters that would
//! break either rule return an error and leave the transform untouched.
//!
//! # Example
//!
//! ```
//! use editor_scene::Transform;
//! use glam::{Quat, Vec3};
//!
//! let t = Transform::new()
//!     .with_position(Vec3::new(1.0, 0.0, 0.0))
//!     .with_rotation(Quat::from_rotation_y(0.5))
//!     .unwrap();
//!
//! let world_pos = t.matrix().transform_point3(Vec3::ZERO);
//! assert!((world_pos - Vec3::new(1.0, 0.0, 0.0)).length() < 0.001);
//! ```

use glam::{Mat4, Quat, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::math;

/// A transform representing position, rotation, and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transform from a position and an already normalized rotation.
    pub(crate) fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        debug_assert!(rotation.is_normalized());
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> SceneResult<Self> {
        self.set_rotation(rotation)?;
        Ok(self)
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> SceneResult<Self> {
        self.set_scale(scale)?;
        Ok(self)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the rotation, normalizing it first.
    pub fn set_rotation(&mut self, rotation: Quat) -> SceneResult<()> {
        let length = rotation.length();
        if !rotation.is_finite() || length < f32::EPSILON {
            return Err(SceneError::DegenerateRotation);
        }
        self.rotation = rotation / length;
        Ok(())
    }

    /// Set the scale. Any zero component is rejected.
    pub fn set_scale(&mut self, scale: Vec3) -> SceneResult<()> {
        if !scale.is_finite() || scale.cmpeq(Vec3::ZERO).any() {
            return Err(SceneError::ZeroScale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Get the local-to-world matrix, `Translation * Rotation * Scale`.
    pub fn matrix(&self) -> Mat4 {
        math::compose(self.position, self.rotation, self.scale)
    }

    /// Get the inverse of [`Transform::matrix`].
    ///
    /// For a camera node this is its view matrix. The scale invariant
    /// guarantees the matrix is invertible.
    pub fn inverse_matrix(&self) -> Mat4 {
        self.matrix().inverse()
    }

    /// Get the normal matrix (inverse transpose of the local-to-world matrix).
    pub fn normal_matrix(&self) -> Mat4 {
        self.inverse_matrix().transpose()
    }

    /// Largest absolute scale component.
    pub fn max_scale(&self) -> f32 {
        self.scale.abs().max_element()
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the right direction vector.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}
