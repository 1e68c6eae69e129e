//! Leaf widgets: text labels and hexagonal tile buttons.
//!
//! Widgets are drawn and hit-tested at a position resolved by their parent
//! container; they never store their own screen position. Drag behavior is
//! expressed through the [`DragSource`] and [`DragSink`] capabilities, which
//! [`Widget::as_drag_source`] / [`Widget::as_drag_sink`] expose only when the
//! concrete widget supports them.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::config::DEFAULT_HIGHLIGHT;
use crate::consts::TILE_PADDING_PX;
use crate::error::Result;
use crate::geometry::Point;
use crate::hex::point_in_hexagon;
use crate::moves::Move;
use crate::scene::NodeId;
use crate::surface::Surface;
use crate::tile::TileKind;

/// A legal drop destination for a draggable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTarget {
    /// The widget that accepts the drop.
    pub node: NodeId,
    /// What dropping there means.
    pub intent: Move,
}

/// Capability to start a drag.
pub trait DragSource {
    /// Begin dragging; hides the origin widget and returns the dragged id.
    fn start_drag(&mut self) -> NodeId;
}

/// Capability to finish a drag.
pub trait DragSink {
    /// Finish dragging; restores the origin widget.
    fn end_drag(&mut self);
}

// =============================================================
// Label
// =============================================================

/// Immutable text. Always visible, never a hit target.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    id: NodeId,
    text: String,
    font: String,
    color: String,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, font: impl Into<String>, color: impl Into<String>) -> Self {
        Self { id: NodeId::next(), text: text.into(), font: font.into(), color: color.into() }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    fn paint(&self, surface: &mut dyn Surface, at: Point) -> Result<()> {
        surface.fill_text(&self.text, at, &self.font, &self.color)
    }
}

// =============================================================
// HexButton
// =============================================================

/// A hexagonal tile button, optionally draggable.
#[derive(Debug, Clone, PartialEq)]
pub struct HexButton {
    id: NodeId,
    /// Circumradius in pixels.
    pub size: f64,
    pub fill: String,
    pub glyph: Option<TileKind>,
    pub padding: f64,
    pub highlight: String,
    /// The button can currently act; drawn with a highlight ring.
    pub enabled: bool,
    /// Cleared while the button is being dragged.
    pub visible: bool,
    drag_targets: Vec<DragTarget>,
    draggable: bool,
}

impl HexButton {
    #[must_use]
    pub fn new(size: f64, fill: impl Into<String>) -> Self {
        Self {
            id: NodeId::next(),
            size,
            fill: fill.into(),
            glyph: None,
            padding: TILE_PADDING_PX,
            highlight: DEFAULT_HIGHLIGHT.into(),
            enabled: false,
            visible: true,
            drag_targets: Vec::new(),
            draggable: false,
        }
    }

    #[must_use]
    pub fn with_glyph(mut self, tile: TileKind) -> Self {
        self.glyph = Some(tile);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, color: impl Into<String>) -> Self {
        self.highlight = color.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Make the button draggable onto `targets`.
    pub fn set_drag_targets(&mut self, targets: Vec<DragTarget>) {
        self.drag_targets = targets;
        self.draggable = true;
    }

    #[must_use]
    pub fn drag_targets(&self) -> &[DragTarget] {
        &self.drag_targets
    }

    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Hit test in screen space against the hexagon centered at `position`.
    #[must_use]
    pub fn contains(&self, position: Point, point: Point) -> bool {
        point_in_hexagon(position, self.size, point)
    }

    fn paint(&self, surface: &mut dyn Surface, at: Point) -> Result<()> {
        if self.enabled {
            surface.fill_hexagon(at, self.size, &self.highlight)?;
        }
        surface.fill_hexagon(at, self.size - self.padding, &self.fill)?;
        if let Some(tile) = self.glyph {
            surface.draw_glyph(tile, at, self.size)?;
        }
        Ok(())
    }
}

impl DragSource for HexButton {
    fn start_drag(&mut self) -> NodeId {
        self.visible = false;
        self.id
    }
}

impl DragSink for HexButton {
    fn end_drag(&mut self) {
        self.visible = true;
    }
}

// =============================================================
// Widget
// =============================================================

/// Any leaf of the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Label(Label),
    Button(HexButton),
}

impl Widget {
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Label(l) => l.id(),
            Self::Button(b) => b.id(),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Label(_) => true,
            Self::Button(b) => b.visible,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Label(_) => false,
            Self::Button(b) => b.enabled,
        }
    }

    /// Whether `point` hits this widget when it sits at `position`.
    #[must_use]
    pub fn contains(&self, position: Point, point: Point) -> bool {
        match self {
            Self::Label(_) => false,
            Self::Button(b) => b.contains(position, point),
        }
    }

    /// Legal drop destinations; empty for widgets that cannot be dragged.
    #[must_use]
    pub fn drag_targets(&self) -> &[DragTarget] {
        match self {
            Self::Label(_) => &[],
            Self::Button(b) => b.drag_targets(),
        }
    }

    /// Paint at `at`. Invisible widgets draw nothing.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, surface: &mut dyn Surface, at: Point) -> Result<()> {
        if !self.is_visible() {
            return Ok(());
        }
        self.draw_ghost(surface, at)
    }

    /// Paint at `at` regardless of visibility (the copy under the pointer).
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw_ghost(&self, surface: &mut dyn Surface, at: Point) -> Result<()> {
        match self {
            Self::Label(l) => l.paint(surface, at),
            Self::Button(b) => b.paint(surface, at),
        }
    }

    pub fn as_drag_source(&mut self) -> Option<&mut dyn DragSource> {
        match self {
            Self::Button(b) if b.draggable => Some(b),
            _ => None,
        }
    }

    pub fn as_drag_sink(&mut self) -> Option<&mut dyn DragSink> {
        match self {
            Self::Button(b) if b.draggable => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_button(&self) -> Option<&HexButton> {
        match self {
            Self::Button(b) => Some(b),
            Self::Label(_) => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut HexButton> {
        match self {
            Self::Button(b) => Some(b),
            Self::Label(_) => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Self::Label(l) => Some(l),
            Self::Button(_) => None,
        }
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<HexButton> for Widget {
    fn from(button: HexButton) -> Self {
        Self::Button(button)
    }
}
