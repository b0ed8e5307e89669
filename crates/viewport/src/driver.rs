//! Viewport driver: routes input and commands to the camera rig and feeds
//! the renderer once per frame.
//!
//! The driver owns the orbit controller, never the scene. Every entry point
//! borrows the [`SceneGraph`] for the duration of the call.

use tracing::{debug, info, warn};

use editor_core::{EditorConfig, OrbitConfig, ViewportConfig};
use editor_scene::{LightKind, Node, NodeId, NodeType, OrbitController, SceneGraph};

use crate::commands::EditorCommand;
use crate::error::ViewportResult;
use crate::input::Gesture;
use crate::snapshot::{FrameSnapshot, Renderer};

/// Glue between the host's input, the scene and a [`Renderer`].
#[derive(Debug)]
pub struct ViewportDriver {
    controller: OrbitController,
    config: ViewportConfig,
    frame: u64,
}

impl Default for ViewportDriver {
    fn default() -> Self {
        Self::new(OrbitConfig::default(), ViewportConfig::default())
    }
}

impl ViewportDriver {
    pub fn new(orbit: OrbitConfig, config: ViewportConfig) -> Self {
        Self {
            controller: OrbitController::new(orbit),
            config,
            frame: 0,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.orbit.clone(), config.viewport.clone())
    }

    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut OrbitController {
        &mut self.controller
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.config.aspect_ratio
    }

    /// Update the aspect ratio after the viewport was resized. Empty
    /// viewports keep the previous ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.config.aspect_ratio = width as f32 / height as f32;
        info!(
            "Viewport resized to {}x{} (aspect {})",
            width, height, self.config.aspect_ratio
        );
    }

    /// Run a controller operation against a copy of the active camera and
    /// write the result back only if the placement changed.
    fn drive_camera<F>(&mut self, graph: &mut SceneGraph, op: F)
    where
        F: FnOnce(&mut OrbitController, &mut Node, &SceneGraph),
    {
        let Some(mut camera) = graph.active_camera().cloned() else {
            debug!("No active camera to drive");
            return;
        };

        op(&mut self.controller, &mut camera, graph);

        let changed = graph
            .node(camera.id())
            .is_some_and(|node| node.transform() != camera.transform());
        if changed && let Some(node) = graph.node_mut(camera.id()) {
            *node.transform_mut() = camera.transform().clone();
        }
    }

    /// Apply one gesture.
    pub fn handle_gesture(&mut self, graph: &mut SceneGraph, gesture: Gesture) {
        let sensitivity = self.config.drag_sensitivity;
        match gesture {
            Gesture::Drag { dx, dy } => self.drive_camera(graph, |controller, camera, _| {
                controller.orbit(camera, dx * sensitivity, -dy * sensitivity)
            }),
            Gesture::Pinch { magnification } => {
                self.drive_camera(graph, |controller, camera, _| {
                    controller.zoom(camera, -(magnification - 1.0))
                })
            }
            Gesture::Pan { dx, dy } => self.drive_camera(graph, |controller, camera, _| {
                controller.pan(camera, dx * sensitivity, dy * sensitivity)
            }),
            Gesture::Tap => graph.deselect_node(),
        }
    }

    /// Apply a toolbar or outliner command.
    ///
    /// Returns the id of the node the command created, if any.
    pub fn execute(&mut self, graph: &mut SceneGraph, command: EditorCommand) -> Option<NodeId> {
        debug!("Executing command: {}", command);
        match command {
            EditorCommand::FrameAll => {
                let active = graph.active_camera_id();
                self.drive_camera(graph, |controller, camera, graph| {
                    controller.frame_all(
                        camera,
                        graph.nodes().filter(|node| Some(node.id()) != active),
                    )
                });
                None
            }
            EditorCommand::FrameSelected => {
                let Some(selected) = graph.selected().cloned() else {
                    debug!("Nothing selected to frame");
                    return None;
                };
                self.drive_camera(graph, |controller, camera, _| {
                    controller.focus_on_node(camera, &selected)
                });
                None
            }
            EditorCommand::ResetView => {
                self.drive_camera(graph, |controller, camera, _| controller.reset(camera));
                None
            }
            EditorCommand::DeleteSelected => {
                match graph.selected_id() {
                    Some(id) => {
                        graph.remove_node(id);
                    }
                    None => debug!("Nothing selected to delete"),
                }
                None
            }
            EditorCommand::SetControlMode(mode) => {
                self.controller.set_mode(mode);
                None
            }
            EditorCommand::AddCamera => {
                let name = next_name(graph, NodeType::Camera, "Camera");
                Some(graph.add_node(Node::camera(name)))
            }
            EditorCommand::AddLight(kind) => {
                let base = match kind {
                    LightKind::Directional => "Directional Light",
                    LightKind::Point => "Point Light",
                };
                let name = next_name(graph, NodeType::Light, base);
                Some(graph.add_node(Node::light(name, kind)))
            }
            EditorCommand::AddEmpty => {
                let name = next_name(graph, NodeType::Empty, "Empty");
                Some(graph.add_node(Node::empty(name)))
            }
        }
    }

    /// Build the snapshot for the current frame without rendering it.
    ///
    /// The controller first picks up any change made to the active camera
    /// outside of it, e.g. from an inspector panel.
    pub fn prepare_frame(&mut self, graph: &mut SceneGraph) -> ViewportResult<FrameSnapshot> {
        if let Some(camera) = graph.active_camera() {
            self.controller.sync_with_camera(camera);
        }

        self.frame += 1;
        let mut snapshot = FrameSnapshot::capture(graph, self.config.aspect_ratio)?;
        snapshot.frame = self.frame;
        snapshot.scene_changed = graph.take_dirty();
        Ok(snapshot)
    }

    /// Prepare and render one frame.
    pub fn frame(
        &mut self,
        graph: &mut SceneGraph,
        renderer: &mut dyn Renderer,
    ) -> ViewportResult<()> {
        let snapshot = match self.prepare_frame(graph) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Frame {} skipped: {}", self.frame, e);
                return Err(e);
            }
        };
        renderer.render(&snapshot)
    }
}

fn next_name(graph: &SceneGraph, node_type: NodeType, base: &str) -> String {
    let count = graph.nodes_of_type(node_type).count();
    if count == 0 {
        base.to_string()
    } else {
        format!("{} {}", base, count + 1)
    }
}
