//! Scene Editor - Headless Entry Point
//!
//! Builds the starter scene, imports any models named on the command line
//! and plays a short scripted session through the viewport driver, logging
//! every frame instead of drawing it.
//!
//! Usage: `editor [--config <file.toml>] [model ...]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use tracing::{info, warn};

use editor_core::EditorConfig;
use editor_scene::{AssetHandle, ControlMode, LightKind, SceneGraph};
use editor_viewport::{
    AssetError, AssetLoader, EditorCommand, FrameSnapshot, InputState, LightUniform,
    LoadedAsset, Renderer, ViewportDriver, ViewportResult, import_model,
};

/// Renderer that logs what it would draw.
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameSnapshot) -> ViewportResult<()> {
        self.frames += 1;
        if !frame.scene_changed && frame.frame > 1 {
            return Ok(());
        }

        match &frame.camera {
            Some(camera) => info!(
                "Frame {}: camera at {:.2}, {} lights, {} models",
                frame.frame,
                camera.camera_position,
                frame.lights.len(),
                frame.models.len()
            ),
            None => warn!("Frame {}: no active camera", frame.frame),
        }
        for light in &frame.lights {
            match light {
                LightUniform::Directional(sun) => {
                    info!("  directional light towards {:.2}", sun.direction)
                }
                LightUniform::Point(point) => info!(
                    "  point light at {:.2} (range {})",
                    point.position, point.range
                ),
            }
        }
        for model in &frame.models {
            info!("  {} for node {}", model.asset, model.node);
        }
        Ok(())
    }
}

/// Stand-in loader that accepts common model formats and reports a
/// unit-sized asset for each.
#[derive(Default)]
struct PlaceholderLoader {
    loaded: u64,
}

impl AssetLoader for PlaceholderLoader {
    fn load(&mut self, locator: &str) -> Result<LoadedAsset, AssetError> {
        let supported = ["usdz", "usda", "usdc", "glb", "gltf", "obj"];
        let extension = locator.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match extension {
            Some(ext) if supported.contains(&ext.as_str()) => {
                self.loaded += 1;
                Ok(LoadedAsset {
                    handle: AssetHandle(self.loaded),
                    extents: Vec3::ONE,
                })
            }
            _ => Err(AssetError::Unsupported(locator.to_string())),
        }
    }
}

/// Headless scene editor session
#[derive(Parser, Debug)]
#[command(name = "editor")]
#[command(about = "Run a scripted viewport session over the starter scene")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model files to import before framing the scene
    models: Vec<String>,
}

struct App {
    graph: SceneGraph,
    driver: ViewportDriver,
    renderer: LogRenderer,
    input: InputState,
}

impl App {
    fn new(config: &EditorConfig) -> Self {
        Self {
            graph: SceneGraph::with_default_scene(),
            driver: ViewportDriver::from_config(config),
            renderer: LogRenderer::default(),
            input: InputState::new(),
        }
    }

    /// Apply pending input, then render.
    fn redraw(&mut self) -> Result<()> {
        if self.input.has_pending() {
            for gesture in self.input.take_gestures() {
                self.driver.handle_gesture(&mut self.graph, gesture);
            }
        }
        self.driver
            .frame(&mut self.graph, &mut self.renderer)
            .context("Failed to render frame")
    }

    fn run_script(&mut self, models: &[String]) -> Result<()> {
        self.driver.resize(1280, 720);
        self.redraw()?;

        let mut loader = PlaceholderLoader::default();
        for locator in models {
            import_model(&mut self.graph, &mut loader, locator);
        }
        self.driver.execute(&mut self.graph, EditorCommand::FrameAll);
        self.redraw()?;

        self.input.on_drag(120.0, -40.0);
        self.input.on_pinch(1.2);
        self.redraw()?;

        self.input.on_pan(30.0, 10.0);
        self.redraw()?;

        if let Some(sun) = self
            .driver
            .execute(&mut self.graph, EditorCommand::AddLight(LightKind::Directional))
        {
            self.graph.select_node(sun);
        }
        self.driver.execute(&mut self.graph, EditorCommand::FrameSelected);
        self.redraw()?;

        self.driver.execute(
            &mut self.graph,
            EditorCommand::SetControlMode(ControlMode::Locked),
        );
        self.input.on_drag(500.0, 0.0);
        self.redraw()?;

        self.driver
            .execute(&mut self.graph, EditorCommand::SetControlMode(ControlMode::Orbit));
        self.input.on_tap();
        self.driver.execute(&mut self.graph, EditorCommand::ResetView);
        self.redraw()?;

        info!(
            "Session finished after {} frames with {} nodes",
            self.renderer.frames,
            self.graph.len()
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    // Initialize logging
    editor_core::init_logging(config.log_filter.as_deref());
    info!("Starting Scene Editor");
    if let Some(path) = &args.config {
        info!("Using config from {}", path.display());
    }

    let mut app = App::new(&config);
    app.run_script(&args.models)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_config_and_models() {
        let args = Args::try_parse_from(["editor", "--config", "editor.toml", "a.usdz", "b.glb"])
            .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("editor.toml")));
        assert_eq!(args.models, ["a.usdz", "b.glb"]);

        let args = Args::try_parse_from(["editor"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.models.is_empty());
    }

    #[test]
    fn test_config_flag_needs_a_path() {
        assert!(Args::try_parse_from(["editor", "--config"]).is_err());
    }

    #[test]
    fn test_placeholder_loader_formats() {
        let mut loader = PlaceholderLoader::default();
        assert!(loader.load("chair.USDZ").is_ok());
        assert!(matches!(
            loader.load("notes.txt"),
            Err(AssetError::Unsupported(_))
        ));
    }
}
