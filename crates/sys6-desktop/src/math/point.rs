//! 2D integer point

use serde::{Deserialize, Serialize};

use super::COORD_LIMIT;

/// A position or offset on the surface, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates to `±COORD_LIMIT`
    pub fn confine(self) -> Point {
        Point::new(
            self.x.clamp(-COORD_LIMIT, COORD_LIMIT),
            self.y.clamp(-COORD_LIMIT, COORD_LIMIT),
        )
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}
