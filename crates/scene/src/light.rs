//! Light node payload.

use glam::Vec3;

use crate::error::{SceneError, SceneResult};

/// Kind of light source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LightKind {
    /// Sun-like light; only its orientation matters
    #[default]
    Directional,
    /// Omnidirectional light with a finite range
    Point,
}

/// Light-specific node data.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    /// Light kind
    pub kind: LightKind,
    /// Light color, nominally in [0, 1] per channel
    pub color: Vec3,
    intensity: f32,
    range: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self::new(LightKind::Directional)
    }
}

impl Light {
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            color: Vec3::ONE,
            intensity: 1000.0,
            range: 10.0,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Attenuation range; only meaningful for point lights.
    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn set_intensity(&mut self, intensity: f32) -> SceneResult<()> {
        if !(intensity >= 0.0) || !intensity.is_finite() {
            return Err(SceneError::invalid_range(
                "intensity",
                format!("{intensity} must not be negative"),
            ));
        }
        self.intensity = intensity;
        Ok(())
    }

    pub fn set_range(&mut self, range: f32) -> SceneResult<()> {
        if !(range > 0.0) || !range.is_finite() {
            return Err(SceneError::invalid_range(
                "range",
                format!("{range} must be positive"),
            ));
        }
        self.range = range;
        Ok(())
    }
}
