//! Orbit camera controller.
//!
//! The controller owns an [`OrbitState`] (pivot, distance and two angles)
//! that is the single source of truth for camera placement while in
//! [`ControlMode::Orbit`]. Every control operation updates that state and
//! ends by writing the derived position and rotation into the camera node
//! through [`OrbitController::update_camera`]. The camera node's transform
//! is therefore an output, overwritten on each operation.
//!
//! The reverse path, [`OrbitController::sync_with_camera`], rebuilds the
//! state from a camera that was moved by something else. It is skipped
//! while a write is being applied so the controller never reads back its
//! own half-finished output. Since both paths take `&mut self`, the borrow
//! checker already keeps a sync from running inside a write; the
//! `ApplyState` flag records that invariant for hosts that share the
//! controller behind interior mutability.
//!
//! # Example
//!
//! ```
//! use editor_scene::{Node, OrbitController};
//!
//! let mut camera = Node::camera("Camera");
//! let mut controller = OrbitController::default();
//!
//! controller.reset(&mut camera);
//! controller.zoom(&mut camera, 1.0);
//!
//! assert_eq!(controller.state().radius, 20.0);
//! assert!((camera.position().length() - 20.0).abs() < 1e-3);
//! ```

use std::f32::consts::FRAC_PI_2;

use editor_core::OrbitConfig;
use glam::Vec3;
use tracing::{debug, info, warn};

use crate::bounds::Aabb;
use crate::math;
use crate::node::{Node, NodeKind};

/// How the controller reacts to input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// Camera placement is derived from the orbit state
    #[default]
    Orbit,
    /// All control operations are ignored
    Locked,
}

/// Spherical camera placement around a pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    /// Look-at pivot
    pub target: Vec3,
    /// Distance from the pivot
    pub radius: f32,
    /// Horizontal angle in radians, measured from +X towards +Z
    pub angle_x: f32,
    /// Vertical angle in radians above the horizontal plane
    pub angle_y: f32,
}

impl OrbitState {
    /// Offset of the camera from the pivot.
    pub fn offset(&self) -> Vec3 {
        let (sin_y, cos_y) = self.angle_y.sin_cos();
        let (sin_x, cos_x) = self.angle_x.sin_cos();
        Vec3::new(
            self.radius * cos_y * cos_x,
            self.radius * sin_y,
            self.radius * cos_y * sin_x,
        )
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        self.target + self.offset()
    }
}

/// Whether a write into the camera node is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ApplyState {
    #[default]
    Idle,
    Applying,
}

/// Orbit-style camera rig.
#[derive(Clone, Debug)]
pub struct OrbitController {
    config: OrbitConfig,
    mode: ControlMode,
    state: OrbitState,
    apply: ApplyState,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitController {
    /// Create a controller in orbit mode at the configured default view.
    pub fn new(config: OrbitConfig) -> Self {
        let state = Self::default_state(&config);
        Self {
            config,
            mode: ControlMode::Orbit,
            state,
            apply: ApplyState::Idle,
        }
    }

    fn default_state(config: &OrbitConfig) -> OrbitState {
        OrbitState {
            target: Vec3::from_array(config.default_target),
            radius: config.default_radius,
            angle_x: config.default_yaw,
            angle_y: config.default_pitch,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        if self.mode != mode {
            info!("Camera control mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    /// True only while [`OrbitController::update_camera`] is writing.
    pub fn is_applying(&self) -> bool {
        self.apply == ApplyState::Applying
    }

    fn accepts_input(&self) -> bool {
        self.mode == ControlMode::Orbit
    }

    fn clamp_radius(&self, radius: f32) -> f32 {
        radius.max(self.config.min_radius).min(self.config.max_radius)
    }

    fn clamp_angle_y(&self, angle: f32) -> f32 {
        let limit = FRAC_PI_2 - self.config.pole_margin;
        angle.max(-limit).min(limit)
    }

    // Control operations

    /// Rotate around the pivot. The vertical angle stops short of the poles.
    pub fn orbit(&mut self, camera: &mut Node, delta_yaw: f32, delta_pitch: f32) {
        if !self.accepts_input() || !delta_yaw.is_finite() || !delta_pitch.is_finite() {
            return;
        }
        self.state.angle_x += delta_yaw;
        self.state.angle_y = self.clamp_angle_y(self.state.angle_y + delta_pitch);
        self.update_camera(camera);
    }

    /// Scale the distance to the pivot by `1 + delta`.
    pub fn zoom(&mut self, camera: &mut Node, delta: f32) {
        if !self.accepts_input() || !delta.is_finite() {
            return;
        }
        self.state.radius = self.clamp_radius(self.state.radius * (1.0 + delta));
        self.update_camera(camera);
    }

    /// Slide the pivot in the camera's view plane.
    ///
    /// Pan speed grows with the radius so a drag covers a similar share of
    /// the screen at any zoom level.
    pub fn pan(&mut self, camera: &mut Node, delta_x: f32, delta_y: f32) {
        if !self.accepts_input() || !delta_x.is_finite() || !delta_y.is_finite() {
            return;
        }
        let (right, up, _) = match math::view_basis(camera.position(), self.state.target, Vec3::Y)
        {
            Ok(basis) => basis,
            Err(e) => {
                debug!("Pan skipped: {}", e);
                return;
            }
        };

        let speed = self.state.radius * self.config.pan_speed_factor;
        self.state.target += right * delta_x * speed - up * delta_y * speed;
        self.update_camera(camera);
    }

    /// Pivot around a node at a distance suited to its kind.
    ///
    /// Models are framed by their largest extent times their largest scale
    /// component; other nodes get a fixed close-up distance. The node's
    /// orientation is not considered. The radius is taken as-is so large
    /// models stay in view; the next zoom clamps it.
    pub fn focus_on_node(&mut self, camera: &mut Node, node: &Node) {
        if !self.accepts_input() {
            return;
        }
        let radius = match node.kind() {
            NodeKind::Model(model) => {
                let radius = model.bounds().max_element()
                    * node.transform().max_scale()
                    * self.config.focus_model_factor;
                if radius.is_finite() && radius > 0.0 {
                    radius
                } else {
                    self.config.focus_fallback_radius
                }
            }
            NodeKind::Camera(_) | NodeKind::Light(_) | NodeKind::Empty => {
                self.config.focus_node_radius
            }
        };

        self.state.target = node.position();
        self.state.radius = radius;
        debug!("Focus on '{}' at radius {}", node.name(), self.state.radius);
        self.update_camera(camera);
    }

    /// Pivot around the center of all given nodes, far enough back to see
    /// them. Does nothing for an empty list.
    pub fn frame_all<'a>(&mut self, camera: &mut Node, nodes: impl IntoIterator<Item = &'a Node>) {
        if !self.accepts_input() {
            return;
        }
        if let Some(bounds) = Aabb::enclosing(nodes) {
            self.frame_bounds(camera, bounds);
        }
    }

    /// Pivot around the center of a box, far enough back to see all of it.
    ///
    /// Like [`OrbitController::focus_on_node`], the radius is not clamped.
    pub fn frame_bounds(&mut self, camera: &mut Node, bounds: Aabb) {
        if !self.accepts_input() || !bounds.is_valid() {
            return;
        }
        let radius =
            (bounds.max_dimension() * self.config.frame_factor).max(self.config.frame_min_radius);

        self.state.target = bounds.center();
        self.state.radius = radius;
        debug!(
            "Framed box centered at {} with radius {}",
            self.state.target, self.state.radius
        );
        self.update_camera(camera);
    }

    /// Return to the default view.
    pub fn reset(&mut self, camera: &mut Node) {
        if !self.accepts_input() {
            return;
        }
        self.state = Self::default_state(&self.config);
        self.update_camera(camera);
    }

    /// Rebuild radius and angles from a camera moved by someone else,
    /// keeping the current pivot.
    ///
    /// Skipped when the camera sits on the pivot (no direction to recover)
    /// and while a write into the camera is being applied. The recovered
    /// values are taken as-is; the next control operation clamps them.
    pub fn sync_with_camera(&mut self, camera: &Node) {
        if !self.accepts_input() {
            return;
        }
        if self.is_applying() {
            debug!("Sync skipped: camera write in progress");
            return;
        }

        let offset = camera.position() - self.state.target;
        let distance = offset.length();
        if !(distance >= self.config.sync_min_distance) {
            debug!("Sync skipped: camera is {} from the pivot", distance);
            return;
        }

        let direction = offset / distance;
        self.state.radius = distance;
        self.state.angle_y = direction.y.clamp(-1.0, 1.0).asin();
        self.state.angle_x = direction.z.atan2(direction.x);
    }

    /// Write the placement derived from the orbit state into the camera.
    ///
    /// This is the only place the controller modifies a node.
    pub fn update_camera(&mut self, camera: &mut Node) {
        if !camera.is_camera() {
            warn!(
                "Orbit controller asked to drive {} node '{}'",
                camera.node_type(),
                camera.name()
            );
            return;
        }

        self.apply = ApplyState::Applying;

        let eye = self.state.eye();
        camera.set_position(eye);
        match math::look_at(eye, self.state.target, Vec3::Y) {
            Ok(rotation) => {
                if let Err(e) = camera.transform_mut().set_rotation(rotation) {
                    warn!("Camera rotation rejected: {}", e);
                }
            }
            Err(e) => warn!("Camera orientation left unchanged: {}", e),
        }

        self.apply = ApplyState::Idle;
    }
}
