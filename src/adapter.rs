//! Builds the scene tree from a server game snapshot.
//!
//! The tree is rebuilt wholesale on every snapshot. Its shape is fixed: a
//! root [`Group`] holding the hand (an [`AbsoluteContainer`]) and then the
//! board (a [`HexGridContainer`]). Drag targets are resolved through the
//! board's reverse lookup, so both board tiles and hand tiles point at the
//! actual widgets a drop lands on.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::layout::{AbsoluteContainer, Group, HexGridContainer, Layout};
use crate::moves::{AvailableMoves, Move};
use crate::scene::Scene;
use crate::snapshot::GameSnapshot;
use crate::tile::TileKind;
use crate::widget::{DragTarget, HexButton, Label, Widget};

/// Build the full scene for `snapshot`.
///
/// # Errors
///
/// Fails fast on any malformed move, coordinate, cell or tile name; no
/// partial scene is returned.
pub fn build_scene(snapshot: &GameSnapshot, config: &UiConfig) -> Result<Scene> {
    let moves = AvailableMoves::parse(&snapshot.available_moves)?;
    let board = build_board(snapshot, &moves, config)?;
    let hand = build_hand(snapshot, &moves, &board, config)?;
    debug!(
        moves = moves.len(),
        board = board.children().len(),
        hand = hand.children().len(),
        current = %snapshot.current,
        "scene built"
    );
    Ok(Scene::new(Group::new().with(hand).with(board)))
}

fn tile_button(size: f64, owner: &str, tile: TileKind, config: &UiConfig) -> HexButton {
    HexButton::new(size, owner)
        .with_glyph(tile)
        .with_padding(config.tile_padding)
        .with_highlight(config.highlight.clone())
}

fn marker(config: &UiConfig) -> HexButton {
    HexButton::new(config.board_hex_size, config.marker.clone())
        .with_padding(config.tile_padding)
        .with_highlight(config.highlight.clone())
}

/// Resolve each move's destination to the widget occupying it on the board.
fn resolve_targets(board: &HexGridContainer, moves: impl Iterator<Item = Move>) -> Vec<DragTarget> {
    moves
        .filter_map(|intent| board.lookup(intent.destination()).map(|node| DragTarget { node, intent }))
        .collect()
}

fn build_board(snapshot: &GameSnapshot, moves: &AvailableMoves, config: &UiConfig) -> Result<HexGridContainer> {
    let mut board = HexGridContainer::new(config.board_hex_size);

    for cell in snapshot.cells()? {
        board.add(tile_button(config.board_hex_size, &cell.owner, cell.tile, config), cell.at);
    }

    // Markers only on empty cells; an occupied destination is its occupant.
    for at in moves.destinations() {
        if board.lookup(at).is_none() {
            board.add(marker(config), at);
        }
    }

    for from in moves.movement_sources() {
        let targets = resolve_targets(&board, moves.movements_from(from));
        match board.lookup_mut(from).and_then(Widget::as_button_mut) {
            Some(button) => {
                button.enabled = true;
                button.set_drag_targets(targets);
            }
            None => warn!(%from, "legal movement starts from an empty cell"),
        }
    }

    Ok(board)
}

fn build_hand(
    snapshot: &GameSnapshot,
    moves: &AvailableMoves,
    board: &HexGridContainer,
    config: &UiConfig,
) -> Result<AbsoluteContainer> {
    let size = config.hand_hex_size;
    let font = config.label_font();
    let x = size * 2.0;
    let mut y = size * 2.0;
    let mut hand = AbsoluteContainer::new();

    for (owner, tiles) in &snapshot.players {
        for (name, &count) in tiles {
            if count == 0 {
                continue;
            }
            let tile: TileKind = name.parse()?;
            let mut button = tile_button(size, owner, tile, config);
            if *owner == snapshot.current {
                let targets = resolve_targets(board, moves.placements_for(tile));
                if !targets.is_empty() {
                    button.enabled = true;
                    button.set_drag_targets(targets);
                }
            }
            hand.add(button, Point::new(x, y));
            hand.add(Label::new(format!("x{count}"), font.clone(), config.label_color.clone()), Point::new(x + size, y));
            y += config.hand_row_step();
        }
        y += config.hand_group_gap();
    }

    Ok(hand)
}
