//! Toolbar and outliner commands.

use std::fmt;

use editor_scene::{ControlMode, LightKind};

/// A discrete editor action applied through
/// [`ViewportDriver::execute`](crate::ViewportDriver::execute).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorCommand {
    /// Frame every node except the active camera.
    FrameAll,
    /// Focus the selected node.
    FrameSelected,
    /// Return the camera to the default view.
    ResetView,
    /// Remove the selected node from the scene.
    DeleteSelected,
    /// Switch between orbiting and a locked camera.
    SetControlMode(ControlMode),
    AddCamera,
    AddLight(LightKind),
    AddEmpty,
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorCommand::FrameAll => f.write_str("Frame All"),
            EditorCommand::FrameSelected => f.write_str("Frame Selected"),
            EditorCommand::ResetView => f.write_str("Reset View"),
            EditorCommand::DeleteSelected => f.write_str("Delete Selected"),
            EditorCommand::SetControlMode(mode) => write!(f, "Control Mode: {:?}", mode),
            EditorCommand::AddCamera => f.write_str("Add Camera"),
            EditorCommand::AddLight(kind) => write!(f, "Add {:?} Light", kind),
            EditorCommand::AddEmpty => f.write_str("Add Empty"),
        }
    }
}
