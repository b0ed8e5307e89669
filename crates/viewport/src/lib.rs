//! Viewport boundary of the editor.
//!
//! This crate connects the scene to the outside world:
//! - Gestures and toolbar commands routed to the orbit controller
//! - Model import through an external asset loader
//! - Per-frame snapshots with GPU-ready uniforms for a renderer

pub mod assets;
pub mod commands;
pub mod driver;
mod error;
pub mod input;
pub mod snapshot;
pub mod uniforms;

pub use assets::{AssetLoader, LoadedAsset, begin_import, complete_import, import_model};
pub use commands::EditorCommand;
pub use driver::ViewportDriver;
pub use error::{AssetError, ViewportError, ViewportResult};
pub use input::{Gesture, InputState};
pub use snapshot::{FrameSnapshot, ModelInstance, Renderer};
pub use uniforms::{
    CameraUniform, DirectionalLightUniform, LightUniform, ObjectUniform, PointLightUniform,
};
