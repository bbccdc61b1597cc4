//! Spatial state of a moving actor: float position plus integer collider and hitbox

use crate::spatial::grid::pixel_to_tile;
use crate::spatial::rect::Rect;
use glam::DVec2;

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right
    Horizontal,
    /// Up/down
    Vertical,
}

impl Axis {
    /// Both axes in resolution order
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Component of `vector` along this axis
    pub const fn component(self, vector: DVec2) -> f64 {
        match self {
            Self::Horizontal => vector.x,
            Self::Vertical => vector.y,
        }
    }

    /// Extent of `rect` along this axis
    pub const fn extent(self, rect: &Rect) -> i32 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }
}

/// Position, collider and hitbox of one actor
///
/// `position` is the collider's top-left corner in pixels. The integer
/// rectangles follow it, rounded to the nearest pixel. The hitbox is the
/// collider shrunk by `margin` on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    position: DVec2,
    collider: Rect,
    hitbox: Rect,
    margin: i32,
}

impl Body {
    /// Create a body at `position` with a collider of `size` pixels
    pub fn new(position: DVec2, size: [i32; 2], margin: i32) -> Self {
        let mut body = Self {
            position,
            collider: Rect::new(0, 0, size[0], size[1]),
            hitbox: Rect::default(),
            margin,
        };
        body.sync_rects();
        body
    }

    /// Top-left of the collider in pixels
    pub const fn position(&self) -> DVec2 {
        self.position
    }

    /// Outer rectangle
    pub const fn collider(&self) -> Rect {
        self.collider
    }

    /// Inset rectangle used for collision tests
    pub const fn hitbox(&self) -> Rect {
        self.hitbox
    }

    /// Inset applied to each side of the collider
    pub const fn margin(&self) -> i32 {
        self.margin
    }

    /// Center of the collider
    pub fn center(&self) -> DVec2 {
        self.position
            + DVec2::new(
                f64::from(self.collider.width) / 2.0,
                f64::from(self.collider.height) / 2.0,
            )
    }

    /// Teleport to a new position
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
        self.sync_rects();
    }

    /// Tile containing the body's position
    pub fn tile_position(&self, tile_size: u32) -> [i32; 2] {
        [
            pixel_to_tile(self.position.x, tile_size),
            pixel_to_tile(self.position.y, tile_size),
        ]
    }

    /// Tile containing the hitbox's top-left corner
    pub fn hitbox_tile(&self, tile_size: u32) -> [i32; 2] {
        [
            pixel_to_tile(f64::from(self.hitbox.x), tile_size),
            pixel_to_tile(f64::from(self.hitbox.y), tile_size),
        ]
    }

    /// Move along one axis by `delta` pixels
    pub fn advance(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::Horizontal => self.position.x += delta,
            Axis::Vertical => self.position.y += delta,
        }
        self.sync_rects();
    }

    /// Place the hitbox's leading edge on `edge`
    ///
    /// With `forward` the right (or bottom) edge is moved, otherwise the left
    /// (or top) edge. The position snaps to the resulting whole pixel.
    pub fn snap_hitbox(&mut self, axis: Axis, edge: i32, forward: bool) {
        match (axis, forward) {
            (Axis::Horizontal, true) => self.hitbox.set_right(edge),
            (Axis::Horizontal, false) => self.hitbox.set_left(edge),
            (Axis::Vertical, true) => self.hitbox.set_bottom(edge),
            (Axis::Vertical, false) => self.hitbox.set_top(edge),
        }
        match axis {
            Axis::Horizontal => self.position.x = f64::from(self.hitbox.x - self.margin),
            Axis::Vertical => self.position.y = f64::from(self.hitbox.y - self.margin),
        }
        self.sync_rects();
    }

    fn sync_rects(&mut self) {
        self.collider.x = self.position.x.round() as i32;
        self.collider.y = self.position.y.round() as i32;
        self.hitbox = self
            .collider
            .inflated(-2 * self.margin, -2 * self.margin);
    }
}
