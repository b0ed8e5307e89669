//! Scene nodes.
//!
//! Every node carries an identity, a display name and a [`Transform`], plus
//! a payload fixed at construction: camera, light, model or empty. Code
//! that needs variant data matches on [`NodeKind`] or uses the typed
//! `as_*` accessors.

use std::fmt;

use glam::{Mat4, Quat, Vec3};
use slotmap::Key;

use crate::camera::Camera;
use crate::light::{Light, LightKind};
use crate::model::Model;
use crate::transform::Transform;

slotmap::new_key_type! {
    /// Stable identity of a node inside a [`SceneGraph`](crate::SceneGraph).
    ///
    /// Ids are generational: an id of a removed node never matches a node
    /// inserted later.
    pub struct NodeId;
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data().as_ffi())
    }
}

/// Tag of a node's payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    Camera,
    Light,
    Model,
    Empty,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Camera => "Camera",
            NodeType::Light => "Light",
            NodeType::Model => "Model",
            NodeType::Empty => "Empty",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific node data.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Camera(Camera),
    Light(Light),
    Model(Model),
    Empty,
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Camera(_) => NodeType::Camera,
            NodeKind::Light(_) => NodeType::Light,
            NodeKind::Model(_) => NodeType::Model,
            NodeKind::Empty => NodeType::Empty,
        }
    }
}

/// A node in the scene.
///
/// Nodes compare by identity, not by value: use [`Node::id`] to tell two
/// nodes apart. A node gets its id when it is added to a graph; before that
/// it holds the null id.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    transform: Transform,
    kind: NodeKind,
}

impl Node {
    /// Create a node with the given payload at the origin.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: NodeId::null(),
            name: name.into(),
            transform: Transform::default(),
            kind,
        }
    }

    /// A perspective camera five units back along +Z.
    pub fn camera(name: impl Into<String>) -> Self {
        let mut node = Self::new(name, NodeKind::Camera(Camera::new()));
        node.transform.set_position(Vec3::new(0.0, 0.0, 5.0));
        node
    }

    /// A light placed above the origin.
    ///
    /// Directional lights start tilted 45 degrees downwards; point lights
    /// start up and in front of the origin.
    pub fn light(name: impl Into<String>, kind: LightKind) -> Self {
        let mut node = Self::new(name, NodeKind::Light(Light::new(kind)));
        match kind {
            LightKind::Directional => {
                node.transform = Transform::from_position_rotation(
                    Vec3::new(0.0, 3.0, 0.0),
                    Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
                );
            }
            LightKind::Point => node.transform.set_position(Vec3::new(0.0, 2.0, 2.0)),
        }
        node
    }

    /// A model with no asset attached yet.
    pub fn model(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Model(Model::new()))
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Empty)
    }

    /// Builder-style position setter.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.set_position(position);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: NodeId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to position, rotation and scale.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.set_position(position);
    }

    /// Local-to-world matrix. Nodes are not parented, so local is world.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    /// Inverse of the world matrix, used as the view matrix of cameras.
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.inverse_matrix()
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.kind, NodeKind::Camera(_))
    }

    pub fn as_camera(&self) -> Option<&Camera> {
        match &self.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match &self.kind {
            NodeKind::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_model_mut(&mut self) -> Option<&mut Model> {
        match &mut self.kind {
            NodeKind::Model(model) => Some(model),
            _ => None,
        }
    }
}
