//! Controller and graph behavior exercised end to end through the public API.

use std::f32::consts::FRAC_PI_2;

use editor_core::OrbitConfig;
use editor_scene::{AssetHandle, LightKind, Node, OrbitController, SceneGraph};
use glam::Vec3;

const EPSILON: f32 = 1e-3;

fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

/// Graph with the default scene plus a loaded model, and a controller that
/// has placed the active camera.
fn editor_scene() -> (SceneGraph, OrbitController) {
    let mut graph = SceneGraph::with_default_scene();
    let mut model = Node::model("Cube");
    model
        .as_model_mut()
        .unwrap()
        .finish_loading(AssetHandle(1), Vec3::splat(2.0));
    graph.add_node(model);

    let mut controller = OrbitController::new(OrbitConfig::default());
    let camera = graph.active_camera_mut().expect("default scene has a camera");
    controller.reset(camera);
    (graph, controller)
}

#[test]
fn test_vertical_angle_stays_inside_poles() {
    let (mut graph, mut controller) = editor_scene();
    let camera = graph.active_camera_mut().unwrap();
    let limit = FRAC_PI_2 - 0.1;

    let deltas = [0.3, 1.7, -0.2, 5.0, -9.0, 0.05, 2.5, -0.7, 1e6, -1e6];
    for (i, delta) in deltas.into_iter().enumerate() {
        controller.orbit(camera, i as f32 * 0.1, delta);
        let angle = controller.state().angle_y;
        assert!(
            angle >= -limit - 1e-6 && angle <= limit + 1e-6,
            "angle_y {} escaped the pole limits",
            angle
        );
        assert!(camera.position().is_finite());
        assert!(camera.transform().rotation().is_normalized());
    }
}

#[test]
fn test_zoom_never_leaves_radius_limits() {
    let (mut graph, mut controller) = editor_scene();
    let camera = graph.active_camera_mut().unwrap();

    for delta in [0.5, 10.0, 1e9, -0.99, -1.0, -3.0, 0.01, -1e9, 2.0] {
        for _ in 0..5 {
            controller.zoom(camera, delta);
            let radius = controller.state().radius;
            assert!((0.5..=50.0).contains(&radius), "radius {} out of range", radius);
        }
    }
}

#[test]
fn test_sync_then_update_round_trip() {
    let (mut graph, mut controller) = editor_scene();

    // Something other than the controller moves the camera
    let moved = Vec3::new(12.0, -3.0, -4.0);
    graph.active_camera_mut().unwrap().set_position(moved);

    controller.sync_with_camera(graph.active_camera().unwrap());
    controller.update_camera(graph.active_camera_mut().unwrap());

    let camera = graph.active_camera().unwrap();
    assert!(approx_eq_vec3(camera.position(), moved));
    assert!(approx_eq_vec3(
        camera.transform().forward(),
        (-moved).normalize()
    ));
}

#[test]
fn test_frame_all_over_graph_contents() {
    let (mut graph, mut controller) = editor_scene();
    let camera_id = graph.active_camera_id().unwrap();
    let scene: Vec<Node> = graph
        .nodes()
        .filter(|node| node.id() != camera_id)
        .cloned()
        .collect();

    controller.frame_all(graph.active_camera_mut().unwrap(), &scene);

    // Light at (4.08, 5.90, -1.00) and the cube spanning [-1, 1]^3
    let state = controller.state();
    assert!(approx_eq_vec3(
        state.target,
        Vec3::new((4.08 - 1.0) / 2.0, (5.90 - 1.0) / 2.0, 0.0)
    ));
    assert!((state.radius - 6.9 * 2.0).abs() < EPSILON);

    let camera = graph.active_camera().unwrap();
    assert!(((camera.position() - state.target).length() - state.radius).abs() < EPSILON);
}

#[test]
fn test_focus_selected_light() {
    let (mut graph, mut controller) = editor_scene();
    let light_id = graph.lights().next().unwrap().id();
    graph.select_node(light_id);

    let light = graph.selected().unwrap().clone();
    controller.focus_on_node(graph.active_camera_mut().unwrap(), &light);

    assert_eq!(controller.state().target, light.position());
    assert_eq!(controller.state().radius, 3.0);
}

#[test]
fn test_switching_cameras_by_selection() {
    let mut graph = SceneGraph::with_default_scene();
    let original = graph.active_camera_id().unwrap();
    let side = graph.add_node(Node::camera("Side").with_position(Vec3::new(10.0, 0.0, 0.0)));
    graph.add_node(Node::light("Sun", LightKind::Directional));

    graph.select_node(side);
    assert_eq!(graph.active_camera_id(), Some(side));
    assert!(!graph.node(original).unwrap().as_camera().unwrap().is_active());

    graph.remove_node(side);
    assert_eq!(graph.active_camera_id(), Some(original));
    assert!(graph.node(original).unwrap().as_camera().unwrap().is_active());
    assert!(graph.selected().is_none());

    graph.remove_node(original);
    assert!(graph.active_camera().is_none());
}

#[test]
fn test_view_matrix_moves_target_in_front_of_camera() {
    let (graph, controller) = editor_scene();
    let camera = graph.active_camera().unwrap();

    let in_view = camera.view_matrix().transform_point3(controller.state().target);
    assert!(approx_eq_vec3(in_view, Vec3::new(0.0, 0.0, -controller.state().radius)));
}
