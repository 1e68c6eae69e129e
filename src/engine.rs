use tracing::debug;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::adapter::build_scene;
use crate::assets::AssetRegistry;
use crate::config::UiConfig;
use crate::error::Result;
use crate::geometry::{BoundingBox, Point};
use crate::input::{DragSession, InputState};
use crate::moves::Move;
use crate::render;
use crate::scene::{NodeId, Scene};
use crate::snapshot::GameSnapshot;
use crate::surface::Surface;
use crate::web::{CanvasSurface, context_2d};
use crate::widget::Widget;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The frame is stale and should be redrawn.
    RenderNeeded,
    /// A tile was dropped on one of its legal targets. The host decides
    /// whether to submit it; the engine never does.
    MoveProposed(Move),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub config: UiConfig,
    pub scene: Scene,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: UiConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the scene with one built from `snapshot`.
    ///
    /// Any drag in progress is dropped: its source widget belongs to the old
    /// tree. On error the current scene and gesture are left untouched.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures for malformed snapshots.
    pub fn load_snapshot(&mut self, snapshot: &GameSnapshot) -> Result<Vec<Action>> {
        let scene = build_scene(snapshot, &self.config)?;
        if self.input.is_dragging() {
            debug!("snapshot arrived mid-drag; gesture discarded");
        }
        self.scene = scene;
        self.input = InputState::Idle;
        Ok(vec![Action::RenderNeeded])
    }

    /// Decode and load a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or a malformed snapshot.
    pub fn load_snapshot_json(&mut self, text: &str) -> Result<Vec<Action>> {
        let snapshot = GameSnapshot::from_json(text)?;
        self.load_snapshot(&snapshot)
    }

    // --- Viewport ---

    /// Update the drawing surface dimensions, in pixels.
    #[allow(clippy::float_cmp)]
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        if self.viewport_width == width && self.viewport_height == height {
            return Vec::new();
        }
        self.viewport_width = width;
        self.viewport_height = height;
        vec![Action::RenderNeeded]
    }

    /// The frame box handed to layout containers.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_size(self.viewport_width, self.viewport_height)
    }

    // --- Input events ---

    /// Pointer pressed at `point`, relative to the surface's top-left.
    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if let InputState::Dragging(session) = std::mem::take(&mut self.input) {
            self.release(&session);
            actions.push(Action::RenderNeeded);
        }

        let bounds = self.bounds();
        let Some(hit) = self.scene.hit_test(&bounds, point, |w| w.is_visible() && w.is_enabled()) else {
            return actions;
        };
        let Some(widget) = self.scene.widget_mut(hit.node) else {
            return actions;
        };
        let targets = widget.drag_targets().to_vec();
        let Some(source) = widget.as_drag_source() else {
            return actions;
        };
        let dragged = source.start_drag();
        // The ghost keeps the grab offset of whatever the source hands back.
        let anchor = self.scene.resolve(dragged, &bounds).unwrap_or(hit.position);

        debug!(node = %dragged, targets = targets.len(), "drag started");
        self.input = InputState::Dragging(DragSession { source: dragged, offset: anchor - point, pointer: point, targets });
        vec![Action::RenderNeeded]
    }

    /// Pointer moved to `point`.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Dragging(session) => {
                session.pointer = point;
                vec![Action::RenderNeeded]
            }
            InputState::Idle => Vec::new(),
        }
    }

    /// Pointer released at `point`.
    ///
    /// Dropping onto one of the session's targets proposes its move. The
    /// source is restored either way.
    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        let InputState::Dragging(session) = std::mem::take(&mut self.input) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        let bounds = self.bounds();
        let intent = self.scene.hit_test(&bounds, point, Widget::is_visible).and_then(|hit| session.target_for(hit.node));
        match intent {
            Some(intent) => {
                debug!(node = %session.source, %intent, "drop on legal target");
                actions.push(Action::MoveProposed(intent));
            }
            None => debug!(node = %session.source, "drop off target"),
        }

        self.release(&session);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn release(&mut self, session: &DragSession) {
        if let Some(sink) = self.scene.widget_mut(session.source).and_then(|w| w.as_drag_sink()) {
            sink.end_drag();
        }
    }

    // --- Render ---

    /// Draw the current frame onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        render::draw(surface, &self.scene, &self.bounds(), &self.config.background, self.ghost())
    }

    // --- Queries ---

    /// The dragged widget and where its ghost is drawn.
    #[must_use]
    pub fn ghost(&self) -> Option<(&Widget, Point)> {
        let session = self.input.session()?;
        let widget = self.scene.widget(session.source)?;
        Some((widget, session.ghost_position()))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Id of the widget being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<NodeId> {
        self.input.session().map(|s| s.source)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// Every handler redraws when the core asks for it and hands the actions
/// back so the host can act on proposed moves.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    assets: AssetRegistry<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Fails if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, assets: AssetRegistry<HtmlImageElement>, config: UiConfig) -> Result<Self> {
        let ctx = context_2d(&canvas)?;
        let missing = assets.missing();
        if !missing.is_empty() {
            debug!(?missing, "tile kinds without a glyph image");
        }
        let mut core = EngineCore::with_config(config);
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { canvas, ctx, assets, core })
    }

    // --- Delegated data inputs ---

    /// # Errors
    ///
    /// Malformed snapshot or a drawing failure.
    pub fn load_snapshot_json(&mut self, text: &str) -> Result<Vec<Action>> {
        let actions = self.core.load_snapshot_json(text)?;
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Malformed snapshot or a drawing failure.
    pub fn load_snapshot(&mut self, snapshot: &GameSnapshot) -> Result<Vec<Action>> {
        let actions = self.core.load_snapshot(snapshot)?;
        self.apply(actions)
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Drawing failure.
    pub fn on_pointer_down(&mut self, point: Point) -> Result<Vec<Action>> {
        self.sync_viewport();
        let actions = self.core.on_pointer_down(point);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Drawing failure.
    pub fn on_pointer_move(&mut self, point: Point) -> Result<Vec<Action>> {
        let actions = self.core.on_pointer_move(point);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Drawing failure.
    pub fn on_pointer_up(&mut self, point: Point) -> Result<Vec<Action>> {
        self.sync_viewport();
        let actions = self.core.on_pointer_up(point);
        self.apply(actions)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Propagates `Canvas2D` failures.
    pub fn render(&mut self) -> Result<()> {
        self.sync_viewport();
        let mut surface = CanvasSurface::new(&self.ctx, &self.assets);
        self.core.render(&mut surface)
    }

    /// Pick up canvas resizes made by the host since the last event.
    fn sync_viewport(&mut self) {
        self.core.set_viewport(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    fn apply(&mut self, actions: Vec<Action>) -> Result<Vec<Action>> {
        if actions.contains(&Action::RenderNeeded) {
            self.render()?;
        }
        Ok(actions)
    }
}
