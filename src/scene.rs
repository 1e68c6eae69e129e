//! Node identity and the retained scene tree.
//!
//! A [`Scene`] owns a root [`Container`]. Leaves are never asked for their
//! own position: the walker asks each parent where a child sits and adds that
//! to the parent's resolved origin, so moving a container moves its subtree.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::fmt;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{BoundingBox, Point};
use crate::layout::{AbsoluteContainer, Container, Group, HexGridContainer};
use crate::widget::{HexButton, Label, Widget};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique, monotonically assigned node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a fresh id. Never reused within the process.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================
// SceneNode
// =============================================================

/// A node is either a leaf widget or a container of further nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Container(Container),
    Widget(Widget),
}

impl SceneNode {
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Container(c) => c.id(),
            Self::Widget(w) => w.id(),
        }
    }
}

impl From<Widget> for SceneNode {
    fn from(w: Widget) -> Self {
        Self::Widget(w)
    }
}

impl From<HexButton> for SceneNode {
    fn from(b: HexButton) -> Self {
        Self::Widget(b.into())
    }
}

impl From<Label> for SceneNode {
    fn from(l: Label) -> Self {
        Self::Widget(l.into())
    }
}

impl From<Container> for SceneNode {
    fn from(c: Container) -> Self {
        Self::Container(c)
    }
}

impl From<Group> for SceneNode {
    fn from(c: Group) -> Self {
        Self::Container(c.into())
    }
}

impl From<AbsoluteContainer> for SceneNode {
    fn from(c: AbsoluteContainer) -> Self {
        Self::Container(c.into())
    }
}

impl From<HexGridContainer> for SceneNode {
    fn from(c: HexGridContainer) -> Self {
        Self::Container(c.into())
    }
}

// =============================================================
// Scene
// =============================================================

/// Result of a hit test: the widget hit and where it was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    root: Container,
}

impl Scene {
    #[must_use]
    pub fn new(root: impl Into<Container>) -> Self {
        Self { root: root.into() }
    }

    /// A scene with an empty root group.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Group::new())
    }

    #[must_use]
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Visit every leaf depth-first in child order with its resolved
    /// position. Children whose parent cannot place them are skipped.
    pub fn walk<F>(&self, bounds: &BoundingBox, mut f: F)
    where
        F: FnMut(&Widget, Point),
    {
        self.try_walk::<(), _>(bounds, |w, at| {
            f(w, at);
            ControlFlow::Continue(())
        });
    }

    /// Like [`walk`](Self::walk), stopping at the first `Break`.
    pub fn try_walk<B, F>(&self, bounds: &BoundingBox, mut f: F) -> Option<B>
    where
        F: FnMut(&Widget, Point) -> ControlFlow<B>,
    {
        match walk_container(&self.root, bounds.origin, bounds, &mut f) {
            ControlFlow::Break(b) => Some(b),
            ControlFlow::Continue(()) => None,
        }
    }

    /// First widget in walk order that passes `filter` and contains `point`.
    pub fn hit_test<F>(&self, bounds: &BoundingBox, point: Point, filter: F) -> Option<Hit>
    where
        F: Fn(&Widget) -> bool,
    {
        self.try_walk(bounds, |w, at| {
            if filter(w) && w.contains(at, point) {
                ControlFlow::Break(Hit { node: w.id(), position: at })
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Resolved position of widget `id` for this frame.
    #[must_use]
    pub fn resolve(&self, id: NodeId, bounds: &BoundingBox) -> Option<Point> {
        self.try_walk(bounds, |w, at| if w.id() == id { ControlFlow::Break(at) } else { ControlFlow::Continue(()) })
    }

    #[must_use]
    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        find_widget(&self.root, id)
    }

    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut Widget> {
        find_widget_mut(&mut self.root, id)
    }

    /// Number of leaves reachable from the root.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        count_widgets(&self.root)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::empty()
    }
}

fn walk_container<B, F>(container: &Container, origin: Point, bounds: &BoundingBox, f: &mut F) -> ControlFlow<B>
where
    F: FnMut(&Widget, Point) -> ControlFlow<B>,
{
    for child in container.children() {
        let Some(offset) = container.position_of(child.id(), bounds) else {
            continue;
        };
        let at = origin + offset;
        let flow = match child {
            SceneNode::Widget(w) => f(w, at),
            SceneNode::Container(c) => walk_container(c, at, bounds, f),
        };
        if let ControlFlow::Break(b) = flow {
            return ControlFlow::Break(b);
        }
    }
    ControlFlow::Continue(())
}

fn find_widget(container: &Container, id: NodeId) -> Option<&Widget> {
    container.children().iter().find_map(|child| match child {
        SceneNode::Widget(w) if w.id() == id => Some(w),
        SceneNode::Widget(_) => None,
        SceneNode::Container(c) => find_widget(c, id),
    })
}

fn find_widget_mut(container: &mut Container, id: NodeId) -> Option<&mut Widget> {
    container.children_mut().iter_mut().find_map(|child| match child {
        SceneNode::Widget(w) if w.id() == id => Some(w),
        SceneNode::Widget(_) => None,
        SceneNode::Container(c) => find_widget_mut(c, id),
    })
}

fn count_widgets(container: &Container) -> usize {
    container
        .children()
        .iter()
        .map(|child| match child {
            SceneNode::Widget(_) => 1,
            SceneNode::Container(c) => count_widgets(c),
        })
        .sum()
}
