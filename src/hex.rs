//! Hex grid math: cube coordinates, the odd-row projection to pixels, and
//! exact point-in-hexagon testing for pointy-top hexagons.
//!
//! Board cells are keyed by [`CubeCoordinate`]. Projection goes cube → axial
//! ("odd-row" offset) → pixel, where `size` is always the hexagon's
//! circumradius.

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{INRADIUS_SQ, ROW_SPACING, SQRT_3, TWO_OVER_SQRT_3};
use crate::error::Error;
use crate::geometry::Point;

/// The six unit steps between neighbouring cells.
pub const DIRECTIONS: [CubeCoordinate; 6] = [
    CubeCoordinate::new(0, -1, 1),
    CubeCoordinate::new(1, -1, 0),
    CubeCoordinate::new(1, 0, -1),
    CubeCoordinate::new(0, 1, -1),
    CubeCoordinate::new(-1, 1, 0),
    CubeCoordinate::new(-1, 0, 1),
];

/// Three-axis hex coordinate. Valid coordinates satisfy `x + y + z == 0`.
///
/// The textual form is `"(x,y,z)"`, used both by the server and as the
/// board's cell key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CubeCoordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate one step away in `direction`.
    #[must_use]
    pub fn offset(self, direction: Self) -> Self {
        Self::new(
            self.x.wrapping_add(direction.x),
            self.y.wrapping_add(direction.y),
            self.z.wrapping_add(direction.z),
        )
    }

    /// All six neighbours, in [`DIRECTIONS`] order.
    pub fn neighbours(self) -> impl Iterator<Item = Self> {
        DIRECTIONS.into_iter().map(move |d| self.offset(d))
    }
}

impl fmt::Display for CubeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl FromStr for CubeCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cube_coordinate(s)
    }
}

/// Parse `"(x,y,z)"` into a coordinate.
///
/// Parentheses and whitespace around fields are optional. Anything other
/// than exactly three base-10 integers is rejected.
///
/// # Errors
///
/// Returns [`Error::MalformedCoordinate`] carrying the original text.
pub fn parse_cube_coordinate(text: &str) -> Result<CubeCoordinate, Error> {
    let malformed = || Error::MalformedCoordinate(text.to_owned());
    let inner = text.trim().trim_start_matches('(').trim_end_matches(')');
    let mut fields = inner.split(',').map(|f| f.trim().parse::<i32>());

    let (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) = (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };
    Ok(CubeCoordinate::new(x, y, z))
}

/// Odd-row offset coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axial {
    pub column: i32,
    pub row: i32,
}

/// Convert cube to odd-row offset coordinates.
///
/// Never panics; coordinates that violate the cube invariant produce an
/// unspecified (but finite) result.
#[must_use]
pub fn cube_to_axial(cube: CubeCoordinate) -> Axial {
    let z = cube.z;
    // `z - (z & 1)` is even, so the euclidean division is exact floor division.
    let shift = z.wrapping_sub(z & 1).div_euclid(2);
    Axial { column: cube.x.wrapping_add(shift), row: z }
}

/// Pixel offset of a cell's center relative to the grid origin.
#[must_use]
pub fn axial_to_pixel(cube: CubeCoordinate, size: f64) -> Point {
    let w = SQRT_3 * size;
    let h = 2.0 * size;
    let axial = cube_to_axial(cube);
    let odd = f64::from(axial.row & 1);
    Point {
        x: f64::from(axial.column) * w + odd * w / 2.0,
        y: f64::from(axial.row) * h * ROW_SPACING,
    }
}

/// Whether `point` lies inside the pointy-top hexagon at `center` with
/// circumradius `size`. Boundary points count as inside.
#[must_use]
pub fn point_in_hexagon(center: Point, size: f64, point: Point) -> bool {
    if size <= 0.0 || !size.is_finite() {
        return false;
    }
    let x = (point.x - center.x) / size;
    let y = (point.y - center.y) / size;

    let l2 = x * x + y * y;
    if l2 > 1.0 {
        return false;
    }
    if l2 < INRADIUS_SQ {
        return true;
    }

    let px = x * TWO_OVER_SQRT_3;
    if px.abs() > 1.0 {
        return false;
    }
    let py = 0.5 * px + y;
    if py.abs() > 1.0 {
        return false;
    }
    (px - py).abs() <= 1.0
}

/// Vertices of a pointy-top hexagon, clockwise from the upper-right corner.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hexagon_corners(center: Point, radius: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
}
