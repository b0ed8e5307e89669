//! Scene graph: node storage, selection and the active camera.
//!
//! The graph is the sole owner of node storage. Selection and the active
//! camera are tracked by [`NodeId`], never by reference, so removing a node
//! cannot leave a dangling handle behind.
//!
//! Operations that name an id the graph does not hold are silent no-ops and
//! queries return `None` or an empty iterator. Callers that need to know
//! whether something happened should query first.
//!
//! The node list, selection and active camera change together, so a
//! multi-threaded host should put the whole graph behind one lock rather
//! than guarding the parts separately.

use glam::Vec3;
use slotmap::SlotMap;
use tracing::{debug, info, warn};

use crate::camera::Camera;
use crate::light::LightKind;
use crate::math;
use crate::node::{Node, NodeId, NodeType};

/// Ordered collection of scene nodes.
#[derive(Debug, Default)]
pub struct SceneGraph {
    /// Storage for all nodes, indexed by their ids
    nodes: SlotMap<NodeId, Node>,
    /// Insertion order, used as list order
    order: Vec<NodeId>,
    selected: Option<NodeId>,
    active_camera: Option<NodeId>,
    /// Bumped on every mutation
    revision: u64,
    /// Revision last handed out by `take_dirty`
    observed_revision: u64,
}

impl SceneGraph {
    /// Create an empty graph with no camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the starter scene: an active camera looking at the origin
    /// from above and to the side, plus one point light.
    pub fn with_default_scene() -> Self {
        let mut graph = Self::new();

        let mut camera = Node::camera("Camera").with_position(Vec3::new(7.48, 5.34, 6.50));
        match math::look_at(camera.position(), Vec3::ZERO, Vec3::Y) {
            Ok(rotation) => {
                if let Err(e) = camera.transform_mut().set_rotation(rotation) {
                    warn!("Default camera rotation rejected: {}", e);
                }
            }
            Err(e) => warn!("Default camera left unrotated: {}", e),
        }
        let camera = graph.add_node(camera);
        graph.set_active_camera(camera);

        graph.add_node(
            Node::light("Light", LightKind::Point).with_position(Vec3::new(4.08, 5.90, -1.00)),
        );

        graph
    }

    // Node management

    /// Append a node and return its id.
    ///
    /// Cameras are always inserted inactive; use
    /// [`SceneGraph::set_active_camera`] to switch the viewport to them.
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        if let Some(camera) = node.as_camera_mut() {
            camera.set_active(false);
        }

        let id = self.nodes.insert_with_key(|id| {
            node.assign_id(id);
            node
        });
        self.order.push(id);
        self.touch();

        if let Some(node) = self.nodes.get(id) {
            info!("Added {} node '{}' ({})", node.node_type(), node.name(), id);
        }
        id
    }

    /// Remove a node, returning it if it was present.
    ///
    /// Clears the selection if it pointed at the node. Removing the active
    /// camera promotes the first remaining camera in list order, or leaves
    /// the scene without an active camera.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let Some(removed) = self.nodes.remove(id) else {
            debug!("remove_node: {} not in graph", id);
            return None;
        };
        self.order.retain(|&other| other != id);

        if self.selected == Some(id) {
            self.selected = None;
        }

        if self.active_camera == Some(id) {
            let promoted = self.cameras().next().map(Node::id);
            self.active_camera = promoted;
            if let Some(next) = promoted {
                if let Some(camera) = self.camera_data_mut(next) {
                    camera.set_active(true);
                }
                info!("Active camera removed, promoted {}", next);
            } else {
                info!("Last camera removed, scene has no active camera");
            }
        }

        self.touch();
        info!("Removed {} node '{}' ({})", removed.node_type(), removed.name(), id);
        Some(removed)
    }

    /// Select a node. Selecting a camera also makes it the active camera.
    pub fn select_node(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id) else {
            debug!("select_node: {} not in graph", id);
            return;
        };
        let is_camera = node.is_camera();

        if self.selected != Some(id) {
            self.selected = Some(id);
            self.touch();
            debug!("Selected {}", id);
        }
        if is_camera {
            self.set_active_camera(id);
        }
    }

    pub fn deselect_node(&mut self) {
        if self.selected.take().is_some() {
            self.touch();
            debug!("Selection cleared");
        }
    }

    // Camera management

    /// Make a camera node the active camera.
    ///
    /// The previously active camera is deactivated before the new one is
    /// activated. Ids that are missing or not cameras are ignored.
    pub fn set_active_camera(&mut self, id: NodeId) {
        if self.active_camera == Some(id) {
            return;
        }
        if self.camera_data_mut(id).is_none() {
            debug!("set_active_camera: {} is not a camera in this graph", id);
            return;
        }

        if let Some(previous) = self.active_camera.take()
            && let Some(camera) = self.camera_data_mut(previous)
        {
            camera.set_active(false);
        }
        if let Some(camera) = self.camera_data_mut(id) {
            camera.set_active(true);
        }
        self.active_camera = Some(id);
        self.touch();
        info!("Active camera is now {}", id);
    }

    fn camera_data_mut(&mut self, id: NodeId) -> Option<&mut Camera> {
        self.nodes.get_mut(id).and_then(Node::as_camera_mut)
    }

    // Queries

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable access to a node. Counts as a change for [`SceneGraph::take_dirty`].
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(id)?;
        self.revision = self.revision.wrapping_add(1);
        Some(node)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|&id| self.nodes.get(id))
    }

    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &Node> + '_ {
        self.nodes().filter(move |node| node.node_type() == node_type)
    }

    pub fn cameras(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes_of_type(NodeType::Camera)
    }

    pub fn lights(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes_of_type(NodeType::Light)
    }

    pub fn models(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes_of_type(NodeType::Model)
    }

    pub fn selected_id(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Node> {
        self.selected.and_then(|id| self.nodes.get(id))
    }

    pub fn active_camera_id(&self) -> Option<NodeId> {
        self.active_camera
    }

    pub fn active_camera(&self) -> Option<&Node> {
        self.active_camera.and_then(|id| self.nodes.get(id))
    }

    /// Mutable access to the active camera node, e.g. for the orbit
    /// controller to write its placement.
    pub fn active_camera_mut(&mut self) -> Option<&mut Node> {
        let id = self.active_camera?;
        self.node_mut(id)
    }

    // Change notification

    /// Monotonic counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether anything changed since the previous call.
    ///
    /// Intended to be polled once per frame by the viewport driver.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.revision != self.observed_revision;
        self.observed_revision = self.revision;
        dirty
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
