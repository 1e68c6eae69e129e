//! The drawing-surface abstraction widgets paint onto.
//!
//! The browser implementation lives in [`crate::web`]; tests use a recording
//! surface. All methods propagate backend failures as [`Error::Surface`].
//!
//! [`Error::Surface`]: crate::error::Error::Surface

#[cfg(test)]
#[path = "surface_test.rs"]
pub(crate) mod surface_test;

use crate::error::Result;
use crate::geometry::{BoundingBox, Point};
use crate::tile::TileKind;

/// Minimal 2D drawing operations needed by the scene.
pub trait Surface {
    /// Wipe `bounds` and fill it with `background`.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn clear(&mut self, bounds: &BoundingBox, background: &str) -> Result<()>;

    /// Fill a pointy-top hexagon of circumradius `radius` centered at `center`.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn fill_hexagon(&mut self, center: Point, radius: f64, fill: &str) -> Result<()>;

    /// Draw the image for `tile` in a `size` x `size` box centered at `center`.
    ///
    /// A surface without an image for `tile` draws nothing.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn draw_glyph(&mut self, tile: TileKind, center: Point, size: f64) -> Result<()>;

    /// Draw `text` with its baseline starting at `at`.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: &str) -> Result<()>;
}
