//! Tile codes, placed tile instances and per-type collider adjustments

use crate::spatial::rect::Rect;
use std::fmt;

/// Sprite/collision family of a tile, keyed by the asset catalogue's type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    /// No tile; the blank placeholder in the catalogue
    None,
    /// Background floor under solid rock
    StoneFloor,
    /// Background floor under open cave
    DirtFloor,
    /// Visible wall face
    Wall,
    /// Wall cap seen from above
    WallTop,
    /// Free-standing pillar face; lets the background render beneath it
    Stone,
}

impl TileKind {
    /// Every kind, in catalogue order
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::StoneFloor,
        Self::DirtFloor,
        Self::Wall,
        Self::WallTop,
        Self::Stone,
    ];

    /// Type tag used by the asset catalogue
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StoneFloor => "stone_floor",
            Self::DirtFloor => "dirt_floor",
            Self::Wall => "wall",
            Self::WallTop => "wall_top",
            Self::Stone => "stone",
        }
    }

    /// Parse a type tag
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether the background plane is also drawn beneath this foreground kind
    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Stone)
    }

    /// Collider inflate and offset applied to the sprite bounds, as `(inflate, offset)`
    pub const fn collider_adjustment(self) -> ([i32; 2], [i32; 2]) {
        match self {
            Self::Wall => ([0, -8], [0, -10]),
            Self::WallTop => ([0, -8], [0, 4]),
            Self::Stone => ([-4, -4], [0, 0]),
            Self::None | Self::StoneFloor | Self::DirtFloor => ([0, 0], [0, 0]),
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the two parallel tile layers a tile lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Collidable walls
    Foreground,
    /// Floor, visible through gaps in the foreground
    Background,
}

/// Variant value requesting a random pick among the available variants
pub const RANDOM_VARIANT: i32 = -1;

/// Type and variant pair identifying which sprite/collision profile to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCode {
    /// Tile family
    pub kind: TileKind,
    /// Sprite variant; negative or out-of-range means "pick at random"
    pub variant: i32,
}

impl TileCode {
    /// The empty code: nothing is placed for it
    pub const NONE: Self = Self::new(TileKind::None, 0);

    /// Create a code with an explicit variant
    pub const fn new(kind: TileKind, variant: i32) -> Self {
        Self { kind, variant }
    }

    /// Create a code whose variant is chosen at placement time
    pub const fn random(kind: TileKind) -> Self {
        Self::new(kind, RANDOM_VARIANT)
    }

    /// Whether this code places nothing
    pub fn is_none(&self) -> bool {
        self.kind == TileKind::None
    }
}

impl Default for TileCode {
    fn default() -> Self {
        Self::NONE
    }
}

/// Handle into a level's tile store
///
/// Handles stay valid until the tile is removed or the level regenerated;
/// afterwards they simply resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// Placement flags for a new tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileFlags {
    /// Whether movement collides with the tile
    pub collidable: bool,
    /// Whether the renderer draws the tile
    pub visible: bool,
}

impl TileFlags {
    /// Visible and solid
    pub const SOLID: Self = Self {
        collidable: true,
        visible: true,
    };

    /// Visible, walk-through
    pub const DECOR: Self = Self {
        collidable: false,
        visible: true,
    };
}

impl Default for TileFlags {
    fn default() -> Self {
        Self::DECOR
    }
}

/// A placed tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Handle of this tile in its level's store
    pub id: TileId,
    /// Resolved code (variant is always a valid index)
    pub code: TileCode,
    /// Layer the tile belongs to
    pub plane: Plane,
    /// Cell coordinates `[x, y]`
    pub grid_position: [i32; 2],
    /// Sprite bounds in pixels (top-left at the cell's pixel origin)
    pub bounds: Rect,
    /// Sprite bounds after the per-type inflate/offset
    pub collider: Rect,
    /// Whether movement collides with the tile
    pub collidable: bool,
    /// Whether the renderer draws the tile
    pub visible: bool,
}

impl Tile {
    /// Pixel position of the top-left corner
    pub const fn position(&self) -> [i32; 2] {
        [self.bounds.x, self.bounds.y]
    }
}

/// Compute a collider from sprite bounds using the kind's adjustment table
pub const fn collider_for(kind: TileKind, bounds: Rect) -> Rect {
    let (inflate, offset) = kind.collider_adjustment();
    bounds
        .inflated(inflate[0], inflate[1])
        .translated(offset[0], offset[1])
}
