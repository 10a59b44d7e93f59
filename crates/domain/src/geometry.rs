//! Geometry — position and size shared by rooms and devices.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on the house map.
///
/// Rooms use the full rectangle as their bounding box; devices typically
/// use a point (zero width and height) for their placement inside a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    /// Create a rectangle with explicit position and size.
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized geometry at a point (device placement).
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self::new(x, y, 0, 0)
    }

    /// Whether the point lies within the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}
