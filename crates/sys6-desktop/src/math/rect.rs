//! Axis-aligned integer rectangle

use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// Half-open axis-aligned rectangle: covers `x..x + width` by `y..y + height`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Top-left corner
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Check if two rectangles intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Intersection of two rectangles, or `None` when they do not overlap
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y)))
    }

    /// Expand rectangle by amount on all sides
    pub fn expand(&self, amount: i32) -> Rect {
        let twice = amount.saturating_mul(2);
        Rect::new(
            self.x.saturating_sub(amount),
            self.y.saturating_sub(amount),
            self.width.saturating_add(twice),
            self.height.saturating_add(twice),
        )
    }

    /// Shrink rectangle by amount on all sides
    pub fn shrink(&self, amount: i32) -> Rect {
        self.expand(-amount)
    }

    /// Linear interpolation between two rectangles, rounded to whole pixels
    pub fn lerp(from: &Rect, to: &Rect, t: f32) -> Rect {
        let mix = |a: i32, b: i32| (a as f32 + (b - a) as f32 * t).round() as i32;
        Rect::new(
            mix(from.x, to.x),
            mix(from.y, to.y),
            mix(from.width, to.width),
            mix(from.height, to.height),
        )
    }
}
