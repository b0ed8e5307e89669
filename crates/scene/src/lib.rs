//! Scene graph and camera rig.
//!
//! This crate provides the in-memory scene:
//! - Transform math (composition, look-at, projections)
//! - Typed scene nodes (camera, light, model, empty)
//! - The scene graph with selection and active-camera tracking
//! - The orbit camera controller

pub mod bounds;
pub mod camera;
mod error;
pub mod graph;
pub mod light;
pub mod math;
pub mod model;
pub mod node;
pub mod orbit;
pub mod transform;

pub use bounds::Aabb;
pub use camera::{Camera, ProjectionKind};
pub use error::{SceneError, SceneResult};
pub use graph::SceneGraph;
pub use light::{Light, LightKind};
pub use model::{AssetHandle, Model};
pub use node::{Node, NodeId, NodeKind, NodeType};
pub use orbit::{ControlMode, OrbitController, OrbitState};
pub use transform::Transform;
