//! Editor configuration.
//!
//! Settings are read from a TOML file. Every field has a default, so a
//! partial file (or no file at all) yields a usable configuration.
//!
//! # Example
//!
//! ```
//! use editor_core::EditorConfig;
//!
//! let config = EditorConfig::from_toml_str(
//!     r#"
//!     [orbit]
//!     max_radius = 80.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.orbit.max_radius, 80.0);
//! assert_eq!(config.orbit.min_radius, 0.5);
//! ```

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

/// Tuning for the orbit camera controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Closest the camera may get to its pivot
    pub min_radius: f32,
    /// Farthest the camera may get from its pivot
    pub max_radius: f32,
    /// Distance kept from the poles, in radians
    pub pole_margin: f32,
    /// Pan speed per unit of radius
    pub pan_speed_factor: f32,

    // Reset view
    pub default_target: [f32; 3],
    pub default_radius: f32,
    pub default_yaw: f32,
    pub default_pitch: f32,

    // Framing
    /// Multiplier applied to a model's largest scaled extent when focusing it
    pub focus_model_factor: f32,
    /// Radius used when focusing cameras, lights and empties
    pub focus_node_radius: f32,
    /// Radius used when a model has no usable extents
    pub focus_fallback_radius: f32,
    /// Multiplier applied to the largest box dimension when framing all nodes
    pub frame_factor: f32,
    /// Lower bound for the frame-all radius
    pub frame_min_radius: f32,

    /// Below this camera-to-pivot distance, syncing from the camera is skipped
    pub sync_min_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_radius: 0.5,
            max_radius: 50.0,
            pole_margin: 0.1,
            pan_speed_factor: 0.002,

            default_target: [0.0, 0.0, 0.0],
            default_radius: 10.0,
            default_yaw: 0.78,
            default_pitch: 0.65,

            focus_model_factor: 3.0,
            focus_node_radius: 3.0,
            focus_fallback_radius: 5.0,
            frame_factor: 2.0,
            frame_min_radius: 5.0,

            sync_min_distance: 0.001,
        }
    }
}

/// Viewport input and presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Scale from screen pixels to orbit/pan units
    pub drag_sensitivity: f32,
    /// Width over height of the viewport
    pub aspect_ratio: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.01,
            aspect_ratio: 1.0,
        }
    }
}

/// Top-level editor configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tracing filter directive, used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
    pub orbit: OrbitConfig,
    pub viewport: ViewportConfig,
}

impl EditorConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Check that the values describe a usable controller and viewport.
    pub fn validate(&self) -> Result<()> {
        let orbit = &self.orbit;
        if !(orbit.min_radius > 0.0) {
            return Err(Error::Config(format!(
                "orbit.min_radius must be positive, got {}",
                orbit.min_radius
            )));
        }
        if !(orbit.max_radius >= orbit.min_radius) {
            return Err(Error::Config(format!(
                "orbit.max_radius ({}) must not be below orbit.min_radius ({})",
                orbit.max_radius, orbit.min_radius
            )));
        }
        if !(orbit.pole_margin > 0.0 && orbit.pole_margin < FRAC_PI_2) {
            return Err(Error::Config(format!(
                "orbit.pole_margin must lie in (0, pi/2), got {}",
                orbit.pole_margin
            )));
        }
        if !(orbit.sync_min_distance >= 0.0) {
            return Err(Error::Config(format!(
                "orbit.sync_min_distance must not be negative, got {}",
                orbit.sync_min_distance
            )));
        }
        if !(orbit.default_radius >= orbit.min_radius && orbit.default_radius <= orbit.max_radius)
        {
            return Err(Error::Config(format!(
                "orbit.default_radius ({}) must lie in [{}, {}]",
                orbit.default_radius, orbit.min_radius, orbit.max_radius
            )));
        }
        let positive = [
            ("orbit.pan_speed_factor", orbit.pan_speed_factor),
            ("orbit.focus_model_factor", orbit.focus_model_factor),
            ("orbit.focus_node_radius", orbit.focus_node_radius),
            ("orbit.focus_fallback_radius", orbit.focus_fallback_radius),
            ("orbit.frame_factor", orbit.frame_factor),
            ("orbit.frame_min_radius", orbit.frame_min_radius),
        ];
        if let Some((name, value)) = positive.into_iter().find(|(_, value)| !(*value > 0.0)) {
            return Err(Error::Config(format!("{name} must be positive, got {value}")));
        }
        if !(self.viewport.drag_sensitivity > 0.0) {
            return Err(Error::Config(format!(
                "viewport.drag_sensitivity must be positive, got {}",
                self.viewport.drag_sensitivity
            )));
        }
        if !(self.viewport.aspect_ratio > 0.0) {
            return Err(Error::Config(format!(
                "viewport.aspect_ratio must be positive, got {}",
                self.viewport.aspect_ratio
            )));
        }
        Ok(())
    }
}
