//! Model node payload.
//!
//! The renderable asset itself belongs to the external loader; a model
//! node only keeps a handle to it, the locator it came from and the
//! asset's extents for camera framing.

use std::fmt;

use glam::Vec3;

/// Opaque handle to a renderable owned by the asset loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle(pub u64);

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

/// Model-specific node data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    source: Option<String>,
    asset: Option<AssetHandle>,
    extents: Option<Vec3>,
    loading: bool,
    load_error: Option<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource locator the asset was (or is being) loaded from.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn asset(&self) -> Option<AssetHandle> {
        self.asset
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed load, if any.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Axis-aligned extents of the loaded asset.
    ///
    /// Until an asset with finite, positive extents is attached (including
    /// while a load is in flight) this is the unit cube.
    pub fn bounds(&self) -> Vec3 {
        self.extents().unwrap_or(Vec3::ONE)
    }

    /// Extents reported by the loader, when an asset is attached and they
    /// are usable for framing.
    pub fn extents(&self) -> Option<Vec3> {
        match (self.asset, self.extents) {
            (Some(_), Some(extents)) if extents.is_finite() && extents.max_element() > 0.0 => {
                Some(extents)
            }
            _ => None,
        }
    }

    /// Mark a load from `source` as started.
    pub fn begin_loading(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
        self.loading = true;
        self.load_error = None;
    }

    /// Attach a loaded asset and its extents.
    pub fn finish_loading(&mut self, asset: AssetHandle, extents: Vec3) {
        self.asset = Some(asset);
        self.extents = Some(extents.abs());
        self.loading = false;
        self.load_error = None;
    }

    /// Record a failed load. The node keeps no handle and unit bounds.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.asset = None;
        self.extents = None;
        self.loading = false;
        self.load_error = Some(message.into());
    }
}
