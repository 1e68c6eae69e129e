//! Visual configuration: sizes, colors and hand spacing.
//!
//! Every field has a default, so a host can pass a partial JSON object (or
//! nothing at all) and get a complete configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::TILE_PADDING_PX;
use crate::error::Error;

pub const DEFAULT_BOARD_HEX_SIZE: f64 = 40.0;
pub const DEFAULT_HAND_HEX_SIZE: f64 = 20.0;
pub const DEFAULT_BACKGROUND: &str = "gray";
pub const DEFAULT_HIGHLIGHT: &str = "purple";
pub const DEFAULT_MARKER: &str = "rgba(255, 255, 255, 0.35)";
pub const DEFAULT_LABEL_COLOR: &str = "black";
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Circumradius of board tiles, in pixels.
    pub board_hex_size: f64,
    /// Circumradius of hand tiles, in pixels.
    pub hand_hex_size: f64,
    /// Inset between the highlight ring and the tile body.
    pub tile_padding: f64,
    pub background: String,
    /// Fill of the ring drawn behind tiles that can currently act.
    pub highlight: String,
    /// Fill of the glyph-less destination markers.
    pub marker: String,
    pub label_color: String,
    pub font_family: String,
    /// Vertical step between hand rows. Defaults to `2 * hand_hex_size`.
    pub hand_row_step: Option<f64>,
    /// Extra gap after each owner's group. Defaults to `hand_hex_size`.
    pub hand_group_gap: Option<f64>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            board_hex_size: DEFAULT_BOARD_HEX_SIZE,
            hand_hex_size: DEFAULT_HAND_HEX_SIZE,
            tile_padding: TILE_PADDING_PX,
            background: DEFAULT_BACKGROUND.into(),
            highlight: DEFAULT_HIGHLIGHT.into(),
            marker: DEFAULT_MARKER.into(),
            label_color: DEFAULT_LABEL_COLOR.into(),
            font_family: DEFAULT_FONT_FAMILY.into(),
            hand_row_step: None,
            hand_group_gap: None,
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON object over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed JSON or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn hand_row_step(&self) -> f64 {
        self.hand_row_step.unwrap_or(self.hand_hex_size * 2.0)
    }

    #[must_use]
    pub fn hand_group_gap(&self) -> f64 {
        self.hand_group_gap.unwrap_or(self.hand_hex_size)
    }

    /// CSS font for hand count labels, sized to the hand tiles.
    #[must_use]
    pub fn label_font(&self) -> String {
        format!("{}px {}", self.hand_hex_size, self.font_family)
    }
}
