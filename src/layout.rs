//! Layout containers: each owns its children and answers where a child sits.
//!
//! Positions are stored by [`NodeId`], independent of child order, so a
//! container can be asked about any child without scanning. Containers are
//! filled at construction and never mutated once the scene is assembled.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use tracing::warn;

use crate::geometry::{BoundingBox, Point};
use crate::hex::{CubeCoordinate, axial_to_pixel};
use crate::scene::{NodeId, SceneNode};
use crate::widget::Widget;

/// Position-assignment policy shared by all containers.
pub trait Layout {
    fn id(&self) -> NodeId;

    fn children(&self) -> &[SceneNode];

    fn children_mut(&mut self) -> &mut [SceneNode];

    /// Position of `child` relative to this container's origin, given the
    /// frame's bounding box. `None` (with a warning) for unknown children.
    fn position_of(&self, child: NodeId, bounds: &BoundingBox) -> Option<Point>;
}

fn unregistered(container: NodeId, child: NodeId) -> Option<Point> {
    warn!(%container, %child, "position requested for a child the container never registered");
    None
}

// =============================================================
// Group
// =============================================================

/// Places every child at the container's own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: NodeId,
    children: Vec<SceneNode>,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self { id: NodeId::next(), children: Vec::new() }
    }

    /// Append `child`, builder style.
    #[must_use]
    pub fn with(mut self, child: impl Into<SceneNode>) -> Self {
        self.add(child);
        self
    }

    pub fn add(&mut self, child: impl Into<SceneNode>) -> NodeId {
        let child = child.into();
        let id = child.id();
        self.children.push(child);
        id
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for Group {
    fn id(&self) -> NodeId {
        self.id
    }

    fn children(&self) -> &[SceneNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    fn position_of(&self, child: NodeId, _bounds: &BoundingBox) -> Option<Point> {
        if self.children.iter().any(|c| c.id() == child) {
            Some(Point::ZERO)
        } else {
            unregistered(self.id, child)
        }
    }
}

// =============================================================
// AbsoluteContainer
// =============================================================

/// Each child sits at an explicit offset from the container origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsoluteContainer {
    id: NodeId,
    children: Vec<SceneNode>,
    offsets: HashMap<NodeId, Point>,
}

impl AbsoluteContainer {
    #[must_use]
    pub fn new() -> Self {
        Self { id: NodeId::next(), children: Vec::new(), offsets: HashMap::new() }
    }

    pub fn add(&mut self, child: impl Into<SceneNode>, offset: Point) -> NodeId {
        let child = child.into();
        let id = child.id();
        self.offsets.insert(id, offset);
        self.children.push(child);
        id
    }
}

impl Default for AbsoluteContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for AbsoluteContainer {
    fn id(&self) -> NodeId {
        self.id
    }

    fn children(&self) -> &[SceneNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    fn position_of(&self, child: NodeId, _bounds: &BoundingBox) -> Option<Point> {
        match self.offsets.get(&child) {
            Some(offset) => Some(*offset),
            None => unregistered(self.id, child),
        }
    }
}

// =============================================================
// HexGridContainer
// =============================================================

/// Children are keyed by cube coordinate and centered in the frame: cube
/// origin maps to half the box's width and height from the container origin.
///
/// At most one child per coordinate: adding at an occupied coordinate
/// replaces the previous child and logs a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct HexGridContainer {
    id: NodeId,
    size: f64,
    children: Vec<SceneNode>,
    cells: HashMap<NodeId, CubeCoordinate>,
    index: HashMap<CubeCoordinate, NodeId>,
}

impl HexGridContainer {
    /// `size` is the circumradius used to project coordinates to pixels.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { id: NodeId::next(), size, children: Vec::new(), cells: HashMap::new(), index: HashMap::new() }
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn add(&mut self, child: impl Into<SceneNode>, at: CubeCoordinate) -> NodeId {
        let child = child.into();
        let id = child.id();
        if let Some(previous) = self.index.insert(at, id) {
            warn!(container = %self.id, %at, %previous, replacement = %id, "hex cell overwritten");
            self.cells.remove(&previous);
            self.children.retain(|c| c.id() != previous);
        }
        self.cells.insert(id, at);
        self.children.push(child);
        id
    }

    /// Id of the child at `at`, if any.
    #[must_use]
    pub fn lookup(&self, at: CubeCoordinate) -> Option<NodeId> {
        self.index.get(&at).copied()
    }

    /// Widget at `at`, if the child there is a leaf.
    #[must_use]
    pub fn lookup_widget(&self, at: CubeCoordinate) -> Option<&Widget> {
        let id = self.lookup(at)?;
        self.children.iter().find_map(|c| match c {
            SceneNode::Widget(w) if w.id() == id => Some(w),
            _ => None,
        })
    }

    pub fn lookup_mut(&mut self, at: CubeCoordinate) -> Option<&mut Widget> {
        let id = self.lookup(at)?;
        self.children.iter_mut().find_map(|c| match c {
            SceneNode::Widget(w) if w.id() == id => Some(w),
            _ => None,
        })
    }
}

impl Layout for HexGridContainer {
    fn id(&self) -> NodeId {
        self.id
    }

    fn children(&self) -> &[SceneNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    fn position_of(&self, child: NodeId, bounds: &BoundingBox) -> Option<Point> {
        match self.cells.get(&child) {
            Some(at) => Some(axial_to_pixel(*at, self.size) + Point::new(bounds.width * 0.5, bounds.height * 0.5)),
            None => unregistered(self.id, child),
        }
    }
}

// =============================================================
// Container
// =============================================================

/// Closed set of container kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Group(Group),
    Absolute(AbsoluteContainer),
    HexGrid(HexGridContainer),
}

impl Container {
    #[must_use]
    pub fn layout(&self) -> &dyn Layout {
        match self {
            Self::Group(c) => c,
            Self::Absolute(c) => c,
            Self::HexGrid(c) => c,
        }
    }

    pub fn layout_mut(&mut self) -> &mut dyn Layout {
        match self {
            Self::Group(c) => c,
            Self::Absolute(c) => c,
            Self::HexGrid(c) => c,
        }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.layout().id()
    }

    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        self.layout().children()
    }

    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        self.layout_mut().children_mut()
    }

    #[must_use]
    pub fn position_of(&self, child: NodeId, bounds: &BoundingBox) -> Option<Point> {
        self.layout().position_of(child, bounds)
    }

    #[must_use]
    pub fn as_absolute(&self) -> Option<&AbsoluteContainer> {
        match self {
            Self::Absolute(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_hex_grid(&self) -> Option<&HexGridContainer> {
        match self {
            Self::HexGrid(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Group> for Container {
    fn from(c: Group) -> Self {
        Self::Group(c)
    }
}

impl From<AbsoluteContainer> for Container {
    fn from(c: AbsoluteContainer) -> Self {
        Self::Absolute(c)
    }
}

impl From<HexGridContainer> for Container {
    fn from(c: HexGridContainer) -> Self {
        Self::HexGrid(c)
    }
}
