//! Input model: the drag-and-drop gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. The transitions themselves live in
//! [`EngineCore`](crate::engine::EngineCore); this module only carries the
//! context they need.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::moves::Move;
use crate::scene::NodeId;
use crate::widget::DragTarget;

/// Context of an active drag, captured at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The widget being dragged (hidden in place while the session lasts).
    pub source: NodeId,
    /// Resolved widget position minus the pointer at drag start.
    pub offset: Point,
    /// Last pointer position seen.
    pub pointer: Point,
    /// Legal drop destinations copied from the source widget.
    pub targets: Vec<DragTarget>,
}

impl DragSession {
    /// Where the dragged copy is drawn: keeps the original click offset
    /// instead of snapping the tile's center to the cursor.
    #[must_use]
    pub fn ghost_position(&self) -> Point {
        self.pointer + self.offset
    }

    /// The move meant by dropping onto `node`, if it is a legal target.
    #[must_use]
    pub fn target_for(&self, node: NodeId) -> Option<Move> {
        self.targets.iter().find(|t| t.node == node).map(|t| t.intent)
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A widget is being dragged.
    Dragging(DragSession),
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
