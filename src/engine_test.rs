#![allow(clippy::float_cmp)]

use super::*;
use crate::error::Error;
use crate::hex::{CubeCoordinate, axial_to_pixel};
use crate::surface::surface_test::RecordingSurface;
use crate::tile::TileKind;

// =============================================================
// Helpers
// =============================================================

const SCENARIO: &str = r#"{
    "grid": {"(0,0,0)": "white ant"},
    "players": {"white": {"queen": 1}, "black": {"queen": 1}},
    "current": "white",
    "available_moves": ["move|(0,0,0)|(1,-1,0)", "place|queen|(1,0,-1)"]
}"#;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn core() -> EngineCore {
    let mut core = EngineCore::new();
    core.set_viewport(WIDTH, HEIGHT);
    core.load_snapshot_json(SCENARIO).unwrap();
    core
}

/// Screen position of the board cell `(x, y, z)` at the default board size.
fn cell(x: i32, y: i32, z: i32) -> Point {
    axial_to_pixel(CubeCoordinate::new(x, y, z), 40.0) + Point::new(WIDTH / 2.0, HEIGHT / 2.0)
}

/// Screen position of the first hand row.
fn first_hand_tile() -> Point {
    Point::new(40.0, 40.0)
}

fn proposed(actions: &[Action]) -> Vec<Move> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::MoveProposed(m) => Some(*m),
            Action::RenderNeeded => None,
        })
        .collect()
}

fn button_at(core: &EngineCore, point: Point) -> Option<&crate::widget::HexButton> {
    let hit = core.scene.hit_test(&core.bounds(), point, |_| true)?;
    core.scene.widget(hit.node)?.as_button()
}

// =============================================================
// Construction / loading
// =============================================================

#[test]
fn new_core_is_idle_and_empty() {
    let core = EngineCore::new();
    assert!(!core.is_dragging());
    assert_eq!(core.scene.widget_count(), 0);
    assert_eq!(core.config, UiConfig::default());
}

#[test]
fn load_snapshot_requests_render() {
    let mut core = EngineCore::new();
    assert_eq!(core.load_snapshot_json(SCENARIO).unwrap(), vec![Action::RenderNeeded]);
    assert!(core.scene.widget_count() > 0);
}

#[test]
fn bad_snapshot_keeps_previous_scene() {
    let mut core = core();
    let before = core.scene.clone();
    let err = core.load_snapshot_json(r#"{"available_moves": ["bogus"]}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedMove(_)));
    assert_eq!(core.scene, before);

    assert!(matches!(core.load_snapshot_json("not json"), Err(Error::Json(_))));
    assert_eq!(core.scene, before);
}

#[test]
fn last_loaded_snapshot_wins() {
    let mut core = core();
    core.load_snapshot_json(r#"{"grid": {"(2,-1,-1)": "black spider"}}"#).unwrap();
    assert_eq!(core.scene.widget_count(), 1);
    assert!(button_at(&core, cell(0, 0, 0)).is_none());
}

#[test]
fn viewport_change_requests_render_once() {
    let mut core = EngineCore::new();
    assert_eq!(core.set_viewport(10.0, 20.0), vec![Action::RenderNeeded]);
    assert!(core.set_viewport(10.0, 20.0).is_empty());
    assert_eq!(core.bounds(), BoundingBox::from_size(10.0, 20.0));
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn pointer_down_on_movable_tile_starts_drag() {
    let mut core = core();
    let grab = cell(0, 0, 0) + Point::new(5.0, -3.0);
    assert_eq!(core.on_pointer_down(grab), vec![Action::RenderNeeded]);

    let Some(session) = core.input.session() else {
        panic!("expected a drag session");
    };
    assert_eq!(session.offset, Point::new(-5.0, 3.0));
    assert_eq!(session.pointer, grab);
    assert_eq!(session.targets.len(), 1);

    let source = core.scene.widget(session.source).unwrap();
    assert!(!source.is_visible());
}

#[test]
fn pointer_down_on_disabled_tile_does_nothing() {
    let mut core = core();
    // The black queen sits in the second hand group.
    assert!(core.on_pointer_down(Point::new(40.0, 100.0)).is_empty());
    assert!(!core.is_dragging());
}

#[test]
fn pointer_down_on_empty_space_does_nothing() {
    let mut core = core();
    assert!(core.on_pointer_down(Point::new(WIDTH - 1.0, HEIGHT - 1.0)).is_empty());
    assert!(!core.is_dragging());
}

#[test]
fn pointer_down_on_marker_does_nothing() {
    let mut core = core();
    assert!(core.on_pointer_down(cell(1, -1, 0)).is_empty());
    assert!(!core.is_dragging());
}

#[test]
fn pointer_down_while_dragging_restores_previous_source() {
    let mut core = core();
    core.on_pointer_down(cell(0, 0, 0));
    let first = core.dragged().unwrap();

    core.on_pointer_down(first_hand_tile());
    let second = core.dragged().unwrap();
    assert_ne!(first, second);
    assert!(core.scene.widget(first).unwrap().is_visible());
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn pointer_move_tracks_ghost_while_dragging() {
    let mut core = core();
    core.on_pointer_down(cell(0, 0, 0) + Point::new(2.0, 2.0));
    assert_eq!(core.on_pointer_move(Point::new(10.0, 10.0)), vec![Action::RenderNeeded]);

    let (widget, at) = core.ghost().unwrap();
    assert_eq!(Some(widget.id()), core.dragged());
    assert_eq!(at, Point::new(8.0, 8.0));
}

#[test]
fn pointer_move_when_idle_is_silent() {
    let mut core = core();
    assert!(core.on_pointer_move(Point::new(10.0, 10.0)).is_empty());
    assert!(core.ghost().is_none());
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn drop_on_movement_target_proposes_move() {
    let mut core = core();
    core.on_pointer_down(cell(0, 0, 0));
    let source = core.dragged().unwrap();
    let actions = core.on_pointer_up(cell(1, -1, 0));

    assert_eq!(
        proposed(&actions),
        vec![Move::Movement { from: CubeCoordinate::ORIGIN, to: CubeCoordinate::new(1, -1, 0) }]
    );
    assert_eq!(actions.last(), Some(&Action::RenderNeeded));
    assert!(!core.is_dragging());
    assert!(core.scene.widget(source).unwrap().is_visible());
}

#[test]
fn drop_from_hand_proposes_placement() {
    let mut core = core();
    core.on_pointer_down(first_hand_tile());
    let actions = core.on_pointer_up(cell(1, 0, -1));
    assert_eq!(proposed(&actions), vec![Move::Placement { tile: TileKind::Queen, at: CubeCoordinate::new(1, 0, -1) }]);
}

#[test]
fn drop_off_target_restores_without_proposal() {
    let mut core = core();
    core.on_pointer_down(first_hand_tile());
    let source = core.dragged().unwrap();

    let actions = core.on_pointer_up(cell(1, -1, 0));
    assert!(proposed(&actions).is_empty());
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(core.scene.widget(source).unwrap().is_visible());
}

#[test]
fn hidden_source_is_not_a_drop_target() {
    let mut core = core();
    core.on_pointer_down(cell(0, 0, 0));
    assert!(button_at(&core, cell(0, 0, 0)).is_some());

    let actions = core.on_pointer_up(cell(0, 0, 0));
    assert!(proposed(&actions).is_empty());
    assert!(!core.is_dragging());
}

#[test]
fn drop_where_hand_overlaps_board_hits_the_hand() {
    let mut core = EngineCore::new();
    core.set_viewport(40.0, 80.0);
    core.load_snapshot_json(SCENARIO).unwrap();

    // Board ant at (20, 40); grab it below the hand's first row.
    core.on_pointer_down(Point::new(20.0, 70.0));
    let dragged = core.dragged().and_then(|id| core.scene.widget(id)).and_then(Widget::as_button);
    assert_eq!(dragged.and_then(|b| b.glyph), Some(TileKind::Ant));

    // (56, 40) is inside both the white queen in the hand and the (1,-1,0)
    // marker. The hand is walked first, so the drop proposes nothing.
    let actions = core.on_pointer_up(Point::new(56.0, 40.0));
    assert!(proposed(&actions).is_empty());
    assert!(!core.is_dragging());
}

#[test]
fn pointer_up_when_idle_is_silent() {
    let mut core = core();
    assert!(core.on_pointer_up(cell(1, -1, 0)).is_empty());
}

// =============================================================
// Rebuild during drag
// =============================================================

#[test]
fn rebuild_mid_drag_returns_to_idle() {
    let mut core = core();
    core.on_pointer_down(cell(0, 0, 0));
    let stale = core.dragged().unwrap();

    core.load_snapshot_json(SCENARIO).unwrap();
    assert!(!core.is_dragging());
    assert!(core.ghost().is_none());
    assert!(core.scene.widget(stale).is_none());

    assert!(core.on_pointer_up(cell(1, -1, 0)).is_empty());
}

// =============================================================
// Render
// =============================================================

#[test]
fn render_hides_source_and_paints_ghost() {
    let mut core = core();
    core.on_pointer_down(cell(0, 0, 0));
    core.on_pointer_move(Point::new(100.0, 100.0));

    let mut surface = RecordingSurface::new();
    core.render(&mut surface).unwrap();

    let ants: Vec<Point> =
        surface.glyphs().into_iter().filter(|(t, _)| *t == TileKind::Ant).map(|(_, p)| p).collect();
    assert_eq!(ants, vec![Point::new(100.0, 100.0)]);
}

#[test]
fn render_paints_enabled_highlights() {
    let core = core();
    let mut surface = RecordingSurface::new();
    core.render(&mut surface).unwrap();

    let highlighted = surface.hexagons_filled("purple");
    assert!(highlighted.contains(&cell(0, 0, 0)));
    assert!(highlighted.contains(&first_hand_tile()));
    assert_eq!(highlighted.len(), 2);
}
