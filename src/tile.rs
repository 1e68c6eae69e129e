#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of a playing piece. Serialized in lowercase, as the server sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Queen,
    Spider,
    Beetle,
    Ant,
    Grasshopper,
}

impl TileKind {
    pub const ALL: [Self; 5] = [Self::Queen, Self::Spider, Self::Beetle, Self::Ant, Self::Grasshopper];

    /// Wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queen => "queen",
            Self::Spider => "spider",
            Self::Beetle => "beetle",
            Self::Ant => "ant",
            Self::Grasshopper => "grasshopper",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownTile(s.to_owned()))
    }
}
