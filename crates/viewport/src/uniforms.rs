//! Uniform structures handed to the renderer each frame.
//!
//! All structures use `#[repr(C)]` and implement `bytemuck::Pod` so a
//! renderer can upload them as-is. Layouts follow std140: every `Vec3` is
//! followed by a scalar or explicit padding to fill 16 bytes.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use editor_scene::{Light, LightKind, Node, SceneResult, Transform};

/// Camera uniform buffer object.
///
/// # Memory Layout (std140)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 64   | view |
/// | 64     | 64   | projection |
/// | 128    | 64   | view_projection |
/// | 192    | 12   | camera_position |
/// | 204    | 4    | _padding |
///
/// Total size: 208 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// World space to camera space.
    pub view: Mat4,
    /// Camera space to clip space.
    pub projection: Mat4,
    /// Pre-computed `projection * view`.
    pub view_projection: Mat4,
    /// Camera position in world space.
    pub camera_position: Vec3,
    pub _padding: f32,
}

impl CameraUniform {
    #[inline]
    pub fn new(view: Mat4, projection: Mat4, camera_position: Vec3) -> Self {
        Self {
            view,
            projection,
            view_projection: projection * view,
            camera_position,
            _padding: 0.0,
        }
    }

    /// Build from a camera node. Non-camera nodes get an identity
    /// projection; invalid camera settings are reported as errors.
    pub fn from_camera_node(node: &Node, aspect: f32) -> SceneResult<Self> {
        let projection = match node.as_camera() {
            Some(camera) => camera.projection_matrix(aspect)?,
            None => Mat4::IDENTITY,
        };
        Ok(Self::new(node.view_matrix(), projection, node.position()))
    }

    #[inline]
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// Per-object uniform buffer object.
///
/// # Memory Layout (std140)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 64   | model |
/// | 64     | 64   | normal_matrix |
///
/// Total size: 128 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ObjectUniform {
    /// Object space to world space.
    pub model: Mat4,
    /// Inverse transpose of `model`; only the upper-left 3x3 is meaningful.
    pub normal_matrix: Mat4,
}

impl ObjectUniform {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            model: transform.matrix(),
            normal_matrix: transform.normal_matrix(),
        }
    }

    #[inline]
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// A directional light (sun-like).
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// Direction the light travels in (normalized)
    pub direction: Vec3,
    pub _pad0: f32,
    pub color: Vec3,
    pub intensity: f32,
}

/// A point light (omnidirectional).
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PointLightUniform {
    /// Light position in world space
    pub position: Vec3,
    /// Attenuation radius
    pub range: f32,
    pub color: Vec3,
    pub intensity: f32,
}

/// Engine-facing light built from a light node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightUniform {
    Directional(DirectionalLightUniform),
    Point(PointLightUniform),
}

impl LightUniform {
    /// Build from a light payload and its node's transform. A directional
    /// light shines along the node's forward (-Z) axis.
    pub fn new(light: &Light, transform: &Transform) -> Self {
        match light.kind {
            LightKind::Directional => LightUniform::Directional(DirectionalLightUniform {
                direction: transform.forward().normalize_or_zero(),
                _pad0: 0.0,
                color: light.color,
                intensity: light.intensity(),
            }),
            LightKind::Point => LightUniform::Point(PointLightUniform {
                position: transform.position(),
                range: light.range(),
                color: light.color,
                intensity: light.intensity(),
            }),
        }
    }

    /// Build from a node; `None` for anything that is not a light.
    pub fn from_node(node: &Node) -> Option<Self> {
        node.as_light()
            .map(|light| Self::new(light, node.transform()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_uniform_sizes() {
        assert_eq!(size_of::<CameraUniform>(), 208);
        assert_eq!(CameraUniform::size(), 208);
        assert_eq!(size_of::<ObjectUniform>(), 128);
        assert_eq!(ObjectUniform::size(), 128);
        assert_eq!(size_of::<DirectionalLightUniform>(), 32);
        assert_eq!(size_of::<PointLightUniform>(), 32);
        assert!(align_of::<CameraUniform>() >= 4);
    }

    #[test]
    fn test_camera_uniform_from_node() {
        let node = Node::camera("Camera").with_position(Vec3::new(0.0, 0.0, 5.0));
        let uniform = CameraUniform::from_camera_node(&node, 1.5).unwrap();

        assert_eq!(uniform.camera_position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(uniform.view_projection, uniform.projection * uniform.view);
        let origin_in_view = uniform.view.transform_point3(Vec3::ZERO);
        assert!(origin_in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
    }

    #[test]
    fn test_camera_uniform_reports_bad_fov() {
        let mut node = Node::camera("Camera");
        node.as_camera_mut().unwrap().set_fov(179.9).unwrap();
        assert!(CameraUniform::from_camera_node(&node, 1.0).is_ok());

        node.as_camera_mut().unwrap().set_fov(190.0).unwrap();
        assert!(CameraUniform::from_camera_node(&node, 1.0).is_err());
    }

    #[test]
    fn test_object_uniform() {
        let transform = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::new(1.0, 2.0, 1.0))
            .unwrap();
        let object = ObjectUniform::from_transform(&transform);

        assert_eq!(object.model, transform.matrix());
        assert_eq!(object.normal_matrix, transform.matrix().inverse().transpose());
    }

    #[test]
    fn test_light_uniform_kinds() {
        let sun = Node::light("Sun", LightKind::Directional);
        match LightUniform::from_node(&sun) {
            Some(LightUniform::Directional(light)) => {
                assert!(light.direction.y < 0.0);
                assert!((light.direction.length() - 1.0).abs() < 1e-5);
                assert_eq!(light.intensity, 1000.0);
            }
            other => panic!("Expected directional light, got {:?}", other),
        }

        let bulb = Node::light("Bulb", LightKind::Point);
        match LightUniform::from_node(&bulb) {
            Some(LightUniform::Point(light)) => {
                assert_eq!(light.position, Vec3::new(0.0, 2.0, 2.0));
                assert_eq!(light.range, 10.0);
            }
            other => panic!("Expected point light, got {:?}", other),
        }

        assert!(LightUniform::from_node(&Node::empty("e")).is_none());
    }

    #[test]
    fn test_bytemuck_cast() {
        let camera = CameraUniform::default();
        assert_eq!(bytemuck::bytes_of(&camera).len(), CameraUniform::size());

        let light = PointLightUniform::default();
        assert_eq!(bytemuck::bytes_of(&light).len(), 32);
    }
}
