//! Rule-based conversion of wall/open mazes into typed tile codes
//!
//! The background plane is chosen per cell with weighted variants. The
//! foreground uses a four-neighbor autotiling rule to pick the wall sprite that
//! joins up with adjacent wall segments.

use crate::algorithm::maze::{Cell, MazeMatrix};
use crate::io::configuration::{DIRT_FLOOR_WEIGHTS, STONE_FLOOR_WEIGHTS};
use crate::math::probability::weighted_choice;
use crate::spatial::grid::{in_border, neighbor_index};
use crate::spatial::tile::{TileCode, TileKind};
use ndarray::Array2;
use rand::Rng;

/// Tile codes for one plane, indexed `[row, col]`
pub type TileBlueprint = Array2<TileCode>;

/// Tile codes for both planes of a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelBlueprint {
    /// Collidable wall layer
    pub foreground: TileBlueprint,
    /// Floor layer
    pub background: TileBlueprint,
}

/// Axis-adjacent cells of a wall; `None` where the matrix ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardinalNeighbors {
    /// Cell above
    pub north: Option<Cell>,
    /// Cell below
    pub south: Option<Cell>,
    /// Cell to the right
    pub east: Option<Cell>,
    /// Cell to the left
    pub west: Option<Cell>,
}

impl CardinalNeighbors {
    /// Gather the neighbors of `[row, col]`
    pub fn of(maze: &MazeMatrix, index: [usize; 2]) -> Self {
        let at = |step: [i32; 2]| {
            neighbor_index(index, step, maze.dim()).and_then(|n| maze.get(n).copied())
        };
        Self {
            north: at([0, -1]),
            south: at([0, 1]),
            east: at([1, 0]),
            west: at([-1, 0]),
        }
    }
}

/// Pick the foreground code for an interior wall cell
///
/// A missing neighbor matches neither `Wall` nor `Open`.
pub fn wall_code(neighbors: CardinalNeighbors) -> TileCode {
    if neighbors.south == Some(Cell::Wall) {
        return TileCode::random(TileKind::WallTop);
    }
    if neighbors.north == Some(Cell::Open) {
        return TileCode::random(TileKind::Stone);
    }

    let west = neighbors.west == Some(Cell::Wall);
    let east = neighbors.east == Some(Cell::Wall);
    let variant = match (west, east) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    };
    TileCode::new(TileKind::Wall, variant)
}

/// Classify the background maze: stone floor under walls, dirt floor elsewhere
pub fn classify_background<R: Rng + ?Sized>(maze: &MazeMatrix, rng: &mut R) -> TileBlueprint {
    let (rows, cols) = maze.dim();
    let mut blueprint = Array2::from_elem((rows, cols), TileCode::NONE);

    for ((row, col), cell) in maze.indexed_iter() {
        let code = if *cell == Cell::Wall {
            TileCode::new(
                TileKind::StoneFloor,
                weighted_choice(rng, &STONE_FLOOR_WEIGHTS) as i32,
            )
        } else {
            TileCode::new(
                TileKind::DirtFloor,
                weighted_choice(rng, &DIRT_FLOOR_WEIGHTS) as i32,
            )
        };
        if let Some(slot) = blueprint.get_mut([row, col]) {
            *slot = code;
        }
    }

    blueprint
}

/// Classify the foreground maze
///
/// Border cells become wall caps, open cells on the first interior row close
/// the top of the level with a plain wall, remaining open cells are empty and
/// walls go through [`wall_code`].
pub fn classify_foreground(maze: &MazeMatrix, border: usize) -> TileBlueprint {
    let dims = maze.dim();
    let mut blueprint = Array2::from_elem(dims, TileCode::NONE);

    for ((row, col), cell) in maze.indexed_iter() {
        let index = [row, col];
        let code = if in_border(index, dims, border) {
            TileCode::random(TileKind::WallTop)
        } else if row == border && *cell == Cell::Open {
            TileCode::new(TileKind::Wall, 0)
        } else if *cell == Cell::Wall {
            wall_code(CardinalNeighbors::of(maze, index))
        } else {
            TileCode::NONE
        };
        if let Some(slot) = blueprint.get_mut(index) {
            *slot = code;
        }
    }

    blueprint
}

/// Classify both planes
///
/// The background is drawn first, so a given random state always yields the
/// same pair of blueprints.
pub fn classify<R: Rng + ?Sized>(
    background: &MazeMatrix,
    foreground: &MazeMatrix,
    border: usize,
    rng: &mut R,
) -> LevelBlueprint {
    let background = classify_background(background, rng);
    let foreground = classify_foreground(foreground, border);
    LevelBlueprint {
        foreground,
        background,
    }
}
