//! Wire model of the game state the server returns.
//!
//! ```json
//! {
//!   "grid": { "(0,0,0)": "white queen" },
//!   "players": { "white": { "queen": 0, "ant": 3 }, "black": { "queen": 1 } },
//!   "current": "black",
//!   "available_moves": ["place|queen|(1,-1,0)"]
//! }
//! ```
//!
//! JSON object order is meaningful for the hand layout (owners and tile kinds
//! are listed in the order the server sends them), so maps decode into
//! [`IndexMap`]. A repeated key keeps its first position and its last value.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::hex::CubeCoordinate;
use crate::tile::TileKind;

/// Full game state as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Coordinate text → `"<owner> <tile>"`.
    #[serde(default)]
    pub grid: IndexMap<String, String>,
    /// Owner → tile kind → remaining count.
    #[serde(default)]
    pub players: IndexMap<String, IndexMap<String, u32>>,
    /// Owner whose turn it is.
    #[serde(default)]
    pub current: String,
    /// Legal moves in `action|arg1|arg2` form.
    #[serde(default)]
    pub available_moves: Vec<String>,
}

/// One occupied board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub at: CubeCoordinate,
    pub owner: String,
    pub tile: TileKind,
}

impl GameSnapshot {
    /// Decode a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a snapshot object.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode every occupied cell, in server order.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed coordinate or cell value.
    pub fn cells(&self) -> Result<Vec<Cell>, Error> {
        self.grid.iter().map(|(coordinate, value)| parse_cell(coordinate, value)).collect()
    }
}

fn parse_cell(coordinate: &str, value: &str) -> Result<Cell, Error> {
    let at: CubeCoordinate = coordinate.parse()?;
    let mut parts = value.split_whitespace();
    let (Some(owner), Some(tile), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::MalformedCell { coordinate: coordinate.to_owned(), value: value.to_owned() });
    };
    Ok(Cell { at, owner: owner.to_owned(), tile: tile.parse()? })
}
