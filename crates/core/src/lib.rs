//! Core utilities for the scene editor.
//!
//! This crate provides foundational types used across the editor:
//! - Error types and result aliases
//! - Logging initialization
//! - Configuration management

pub mod config;
mod error;
mod logging;

pub use config::{EditorConfig, OrbitConfig, ViewportConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
