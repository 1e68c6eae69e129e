//! Move descriptions and the query object the adapter builds from them.
//!
//! The server sends legal moves as flat `action|arg1|arg2` strings:
//! `move|<from>|<to>` relocates a tile already on the board and
//! `place|<tile>|<at>` puts a tile from the hand onto the board.

#[cfg(test)]
#[path = "moves_test.rs"]
mod moves_test;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::hex::CubeCoordinate;
use crate::tile::TileKind;

/// A single legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Relocate the tile at `from` to `to`.
    Movement { from: CubeCoordinate, to: CubeCoordinate },
    /// Put a `tile` from the current player's hand at `at`.
    Placement { tile: TileKind, at: CubeCoordinate },
}

impl Move {
    /// The cell this move ends on.
    #[must_use]
    pub fn destination(&self) -> CubeCoordinate {
        match *self {
            Self::Movement { to, .. } => to,
            Self::Placement { at, .. } => at,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movement { from, to } => write!(f, "move|{from}|{to}"),
            Self::Placement { tile, at } => write!(f, "place|{tile}|{at}"),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedMove(s.to_owned());
        let mut fields = s.split('|');
        let (Some(action), Some(arg1), Some(arg2), None) = (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };

        match action {
            "move" => Ok(Self::Movement { from: arg1.parse()?, to: arg2.parse()? }),
            "place" => Ok(Self::Placement { tile: arg1.parse()?, at: arg2.parse()? }),
            _ => Err(malformed()),
        }
    }
}

/// All legal moves for the side to play, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableMoves {
    movements: Vec<(CubeCoordinate, CubeCoordinate)>,
    placements: Vec<(TileKind, CubeCoordinate)>,
}

impl AvailableMoves {
    /// Parse the server's move list.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that is not a well-formed move; a partially
    /// understood move list is never returned.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, Error> {
        let mut out = Self::default();
        for entry in entries {
            match entry.as_ref().parse::<Move>()? {
                Move::Movement { from, to } => out.movements.push((from, to)),
                Move::Placement { tile, at } => out.placements.push((tile, at)),
            }
        }
        Ok(out)
    }

    /// Distinct cells that have at least one outgoing movement, in first-seen order.
    #[must_use]
    pub fn movement_sources(&self) -> Vec<CubeCoordinate> {
        let mut out: Vec<CubeCoordinate> = Vec::new();
        for (from, _) in &self.movements {
            if !out.contains(from) {
                out.push(*from);
            }
        }
        out
    }

    /// Movements starting at `from`.
    pub fn movements_from(&self, from: CubeCoordinate) -> impl Iterator<Item = Move> + '_ {
        self.movements
            .iter()
            .filter(move |(f, _)| *f == from)
            .map(|&(from, to)| Move::Movement { from, to })
    }

    /// Placements of `tile`.
    pub fn placements_for(&self, tile: TileKind) -> impl Iterator<Item = Move> + '_ {
        self.placements
            .iter()
            .filter(move |(t, _)| *t == tile)
            .map(|&(tile, at)| Move::Placement { tile, at })
    }

    /// Every cell some move ends on, deduplicated, in first-seen order
    /// (movements first, then placements).
    #[must_use]
    pub fn destinations(&self) -> Vec<CubeCoordinate> {
        let mut out: Vec<CubeCoordinate> = Vec::new();
        let all = self.movements.iter().map(|(_, to)| *to).chain(self.placements.iter().map(|(_, at)| *at));
        for c in all {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movements.len() + self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
