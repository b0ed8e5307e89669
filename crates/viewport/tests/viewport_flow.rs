//! End-to-end viewport flow: import, frame, render.

use editor_scene::{AssetHandle, NodeType, SceneGraph};
use editor_viewport::{
    AssetError, AssetLoader, EditorCommand, FrameSnapshot, InputState, LightUniform,
    LoadedAsset, Renderer, ViewportDriver, ViewportError, ViewportResult, import_model,
};
use glam::Vec3;

const EPSILON: f32 = 1e-4;

/// Loader that knows a fixed set of assets.
struct CatalogLoader {
    next_handle: u64,
}

impl AssetLoader for CatalogLoader {
    fn load(&mut self, locator: &str) -> Result<LoadedAsset, AssetError> {
        if !locator.ends_with(".usdz") {
            return Err(AssetError::Unsupported(locator.to_string()));
        }
        self.next_handle += 1;
        Ok(LoadedAsset {
            handle: AssetHandle(self.next_handle),
            extents: Vec3::new(2.0, 2.0, 2.0),
        })
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<FrameSnapshot>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameSnapshot) -> ViewportResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&mut self, _frame: &FrameSnapshot) -> ViewportResult<()> {
        Err(ViewportError::Render("device lost".into()))
    }
}

#[test]
fn imported_model_is_framed_and_rendered() {
    let mut graph = SceneGraph::with_default_scene();
    let mut driver = ViewportDriver::default();
    let mut loader = CatalogLoader { next_handle: 0 };
    let mut renderer = RecordingRenderer::default();

    let chair = import_model(&mut graph, &mut loader, "models/chair.usdz");
    assert_eq!(graph.selected_id(), Some(chair));

    driver.execute(&mut graph, EditorCommand::FrameSelected);
    let state = driver.controller().state();
    assert_eq!(state.target, Vec3::ZERO);
    assert!((state.radius - 6.0).abs() < EPSILON);

    driver.frame(&mut graph, &mut renderer).unwrap();
    let frame = &renderer.frames[0];
    assert_eq!(frame.models.len(), 1);
    assert_eq!(frame.models[0].node, chair);
    let camera = frame.camera.unwrap();
    assert!(camera.camera_position.abs_diff_eq(state.eye(), EPSILON));
}

#[test]
fn unsupported_asset_stays_in_scene_without_instance() {
    let mut graph = SceneGraph::new();
    let mut loader = CatalogLoader { next_handle: 0 };

    let id = import_model(&mut graph, &mut loader, "notes.txt");

    assert_eq!(graph.nodes_of_type(NodeType::Model).count(), 1);
    let model = graph.node(id).unwrap().as_model().unwrap();
    assert!(model.load_error().is_some());

    let snapshot = FrameSnapshot::capture(&graph, 1.0).unwrap();
    assert!(snapshot.models.is_empty());
    assert!(snapshot.camera.is_none());
}

#[test]
fn frame_all_includes_model_extents() {
    let mut graph = SceneGraph::with_default_scene();
    let light = graph.lights().next().unwrap().id();
    graph.remove_node(light);
    let mut loader = CatalogLoader { next_handle: 0 };
    import_model(&mut graph, &mut loader, "cube.usdz");

    let mut driver = ViewportDriver::default();
    driver.execute(&mut graph, EditorCommand::FrameAll);

    let state = driver.controller().state();
    assert!(state.target.abs_diff_eq(Vec3::ZERO, EPSILON));
    assert_eq!(state.radius, 5.0);
}

#[test]
fn folded_input_drives_camera() {
    let mut graph = SceneGraph::with_default_scene();
    let mut driver = ViewportDriver::default();
    let mut renderer = RecordingRenderer::default();
    driver.frame(&mut graph, &mut renderer).unwrap();
    let start = driver.controller().state();

    let mut input = InputState::new();
    input.on_drag(20.0, 0.0);
    input.on_drag(-20.0, 0.0);
    input.on_pinch(1.25);
    for gesture in input.take_gestures() {
        driver.handle_gesture(&mut graph, gesture);
    }
    driver.frame(&mut graph, &mut renderer).unwrap();

    let end = driver.controller().state();
    assert!((end.angle_x - start.angle_x).abs() < EPSILON);
    assert!((end.radius - start.radius * 0.75).abs() < EPSILON);
    assert!(renderer.frames[1].scene_changed);
    assert!(matches!(renderer.frames[1].lights[0], LightUniform::Point(_)));
}

#[test]
fn externally_moved_camera_is_picked_up() {
    let mut graph = SceneGraph::with_default_scene();
    let mut driver = ViewportDriver::default();

    graph
        .active_camera_mut()
        .unwrap()
        .set_position(Vec3::new(0.0, 0.0, 8.0));
    driver.prepare_frame(&mut graph).unwrap();

    let state = driver.controller().state();
    assert!((state.radius - 8.0).abs() < EPSILON);
    assert!(state.angle_y.abs() < EPSILON);
}

#[test]
fn renderer_errors_propagate() {
    let mut graph = SceneGraph::with_default_scene();
    let mut driver = ViewportDriver::default();

    let result = driver.frame(&mut graph, &mut FailingRenderer);
    assert!(matches!(result, Err(ViewportError::Render(_))));
}
