//! 2D integer size

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, used to enforce minimum window sizes
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_max() {
        let floor = Size::new(100, 50);
        assert_eq!(Size::new(20, 300).max(floor), Size::new(100, 300));
        assert_eq!(Size::new(400, 10).max(floor), Size::new(400, 50));
    }
}
