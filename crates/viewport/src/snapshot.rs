//! Per-frame data handed to the renderer.

use editor_scene::{AssetHandle, NodeId, SceneGraph};

use crate::error::ViewportResult;
use crate::uniforms::{CameraUniform, LightUniform, ObjectUniform};

/// A loaded model placed in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelInstance {
    pub node: NodeId,
    pub asset: AssetHandle,
    pub object: ObjectUniform,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    /// Frame counter, starting at 1.
    pub frame: u64,
    /// Whether the scene changed since the previous frame.
    pub scene_changed: bool,
    /// `None` when the scene has no active camera.
    pub camera: Option<CameraUniform>,
    pub lights: Vec<LightUniform>,
    pub models: Vec<ModelInstance>,
}

impl FrameSnapshot {
    /// Read the graph as seen from its active camera.
    ///
    /// Models still loading or without an asset are left out.
    pub fn capture(graph: &SceneGraph, aspect: f32) -> ViewportResult<Self> {
        let camera = graph
            .active_camera()
            .map(|node| CameraUniform::from_camera_node(node, aspect))
            .transpose()?;

        let lights = graph.lights().filter_map(LightUniform::from_node).collect();

        let models = graph
            .models()
            .filter_map(|node| {
                let asset = node.as_model()?.asset()?;
                Some(ModelInstance {
                    node: node.id(),
                    asset,
                    object: ObjectUniform::from_transform(node.transform()),
                })
            })
            .collect();

        Ok(Self {
            frame: 0,
            scene_changed: false,
            camera,
            lights,
            models,
        })
    }
}

/// Draws frames produced by the viewport driver.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot) -> ViewportResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_scene::{LightKind, Node};
    use glam::Vec3;

    #[test]
    fn test_capture_default_scene() {
        let graph = SceneGraph::with_default_scene();
        let snapshot = FrameSnapshot::capture(&graph, 16.0 / 9.0).unwrap();

        let camera = snapshot.camera.unwrap();
        assert!(camera.camera_position.abs_diff_eq(Vec3::new(7.48, 5.34, 6.50), 1e-5));
        assert_eq!(snapshot.lights.len(), 1);
        assert!(matches!(snapshot.lights[0], LightUniform::Point(_)));
        assert!(snapshot.models.is_empty());
    }

    #[test]
    fn test_capture_without_camera() {
        let mut graph = SceneGraph::new();
        graph.add_node(Node::light("Sun", LightKind::Directional));

        let snapshot = FrameSnapshot::capture(&graph, 1.0).unwrap();
        assert!(snapshot.camera.is_none());
        assert_eq!(snapshot.lights.len(), 1);
    }

    #[test]
    fn test_only_loaded_models_are_instanced() {
        let mut graph = SceneGraph::new();
        let mut loaded = Node::model("Loaded").with_position(Vec3::new(1.0, 0.0, 0.0));
        loaded
            .as_model_mut()
            .unwrap()
            .finish_loading(AssetHandle(3), Vec3::ONE);
        let loaded = graph.add_node(loaded);
        graph.add_node(Node::model("Pending"));

        let snapshot = FrameSnapshot::capture(&graph, 1.0).unwrap();
        assert_eq!(snapshot.models.len(), 1);
        assert_eq!(snapshot.models[0].node, loaded);
        assert_eq!(snapshot.models[0].asset, AssetHandle(3));
        assert_eq!(
            snapshot.models[0].object.model.w_axis.truncate(),
            Vec3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_invalid_aspect_is_an_error() {
        let graph = SceneGraph::with_default_scene();
        assert!(FrameSnapshot::capture(&graph, 0.0).is_err());
    }
}
