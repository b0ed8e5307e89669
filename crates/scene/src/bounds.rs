//! Axis-aligned bounding boxes for camera framing.

use glam::Vec3;

use crate::node::{Node, NodeKind};

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Empty (inverted) box; its union with anything yields that thing.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box enclosing every node, or `None` when there are no nodes.
    ///
    /// Each node contributes its position. Model nodes also contribute
    /// their scaled extents, centered on the position; rotation is not
    /// taken into account.
    pub fn enclosing<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Option<Self> {
        let mut nodes = nodes.into_iter().peekable();
        nodes.peek()?;

        Some(nodes.fold(Self::EMPTY, |aabb, node| aabb.union(&Self::of_node(node))))
    }

    /// Footprint of a single node.
    pub fn of_node(node: &Node) -> Self {
        let position = node.position();
        match node.kind() {
            NodeKind::Model(model) => {
                let half_extents = (model.bounds() * node.transform().scale()).abs() * 0.5;
                Self::from_center_half_extents(position, half_extents)
            }
            _ => Self::new(position, position),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest edge length.
    #[inline]
    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    #[inline]
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
