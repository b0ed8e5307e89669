//! Model import.
//!
//! Importing is split in two so a host can run the load anywhere: a
//! loading Model node is inserted first, and the loader's result is
//! applied to it later. [`import_model`] runs both halves back to back for
//! loaders that answer immediately.

use std::path::Path;

use glam::Vec3;
use tracing::{error, info, warn};

use editor_scene::{AssetHandle, Node, NodeId, SceneGraph};

use crate::error::AssetError;

/// What an asset loader hands back for a successful load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadedAsset {
    pub handle: AssetHandle,
    /// Axis-aligned size of the asset in its own space.
    pub extents: Vec3,
}

/// Loads renderable assets on behalf of the editor.
pub trait AssetLoader {
    /// Load the asset at `locator`.
    fn load(&mut self, locator: &str) -> Result<LoadedAsset, AssetError>;
}

/// Display name for a model imported from `locator`.
pub fn model_name(locator: &str) -> String {
    Path::new(locator)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("Model")
        .to_string()
}

/// Insert a Model node that is waiting for `locator` to load.
pub fn begin_import(graph: &mut SceneGraph, locator: &str) -> NodeId {
    let mut node = Node::model(model_name(locator));
    if let Some(model) = node.as_model_mut() {
        model.begin_loading(locator);
    }
    let id = graph.add_node(node);
    info!("Importing '{}' into node {}", locator, id);
    id
}

/// Apply a load result to the node created by [`begin_import`].
///
/// On success the node gets its handle and extents and becomes the
/// selection. On failure the error is logged and kept on the node, which
/// stays in the scene with unit bounds. Returns whether an asset was
/// attached; a node that is gone or no longer a model is ignored.
pub fn complete_import(
    graph: &mut SceneGraph,
    id: NodeId,
    result: Result<LoadedAsset, AssetError>,
) -> bool {
    let Some(model) = graph.node_mut(id).and_then(|node| node.as_model_mut()) else {
        warn!("Import finished for node {} which is no longer a model", id);
        return false;
    };

    match result {
        Ok(loaded) => {
            model.finish_loading(loaded.handle, loaded.extents);
            info!(
                "Loaded {} with extents {} into node {}",
                loaded.handle, loaded.extents, id
            );
            graph.select_node(id);
            true
        }
        Err(e) => {
            error!("Failed to load model: {}", e);
            model.fail_loading(e.to_string());
            false
        }
    }
}

/// Import `locator` with `loader` in one step.
pub fn import_model(
    graph: &mut SceneGraph,
    loader: &mut dyn AssetLoader,
    locator: &str,
) -> NodeId {
    let id = begin_import(graph, locator);
    let result = loader.load(locator);
    complete_import(graph, id, result);
    id
}
