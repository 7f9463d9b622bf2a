//! Small geometry helpers shared by the grid, hot-zone and renderer code.

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle in pixel space (inclusive min, exclusive max).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns true if the point lies inside the rectangle.
    ///
    /// The left/top edges are inside, the right/bottom edges are not, so two
    /// rectangles sharing an edge never both claim the same pixel.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.is_valid()
            && x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }
}
