//! Integer axis-aligned rectangles for sprite bounds, colliders and hitboxes

/// Axis-aligned rectangle in pixel units, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (inclusive)
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Top edge (inclusive)
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Move horizontally so the left edge sits at `left`
    pub const fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Move horizontally so the right edge sits at `right`
    pub const fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    /// Move vertically so the top edge sits at `top`
    pub const fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Move vertically so the bottom edge sits at `bottom`
    pub const fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Grow (or shrink, for negative deltas) around the center
    ///
    /// Half of each delta is taken from each side, truncating towards zero,
    /// so odd deltas shift the rectangle by one pixel.
    #[must_use]
    pub const fn inflated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x - dx / 2,
            self.y - dy / 2,
            self.width + dx,
            self.height + dy,
        )
    }

    /// Shift by `(dx, dy)`
    #[must_use]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether the rectangle covers no area
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether two rectangles share interior area
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
