#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

/// A point in drawing-surface space (CSS pixels, origin top-left).
///
/// Also used for offsets: the difference of two points is a `Point`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin.
    #[must_use]
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Axis-aligned box handed to layout containers each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Top-left corner.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self { origin, width, height }
    }

    /// A box anchored at the surface origin.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self { origin: Point::ZERO, width, height }
    }

    /// Center of the box in surface space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width * 0.5, self.origin.y + self.height * 0.5)
    }
}
