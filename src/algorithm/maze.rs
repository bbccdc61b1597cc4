//! Randomized depth-first maze carving at half resolution
//!
//! The carver works on a `(W/2, H/2)` grid so that corridors and the walls
//! between them each become 2x2 blocks once expanded back to `(W, H)`. Dead
//! ends and the start cell are left marked [`Cell::Frontier`] and later widened
//! into small rooms, which breaks up long one-cell corridors.

use crate::io::configuration::MAX_LEVEL_DIMENSION;
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::grid::{CARDINAL_DIRECTIONS, NEIGHBOR_OFFSETS, in_border, neighbor_index};
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

/// Value of one maze cell during carving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Solid rock
    #[default]
    Wall,
    /// Settled corridor
    Open,
    /// Just-discovered node that has not been settled (dead ends keep this mark)
    Frontier,
}

impl Cell {
    /// Whether an actor can stand in the cell
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Maze stored row-major as `[row, col]`
pub type MazeMatrix = Array2<Cell>;

/// Check that a full-resolution size and border can be carved
///
/// # Errors
///
/// Returns `InvalidConfiguration` if either dimension is zero, odd or above
/// the maximum level dimension, or if the border thickness is odd.
pub fn validate_dimensions(width: usize, height: usize, border: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 || value % 2 != 0 {
            return Err(invalid_configuration(
                parameter,
                &value,
                &"must be a positive even number",
            ));
        }
        if value > MAX_LEVEL_DIMENSION {
            return Err(invalid_configuration(
                parameter,
                &value,
                &format!("must not exceed {MAX_LEVEL_DIMENSION}"),
            ));
        }
    }
    if border % 2 != 0 {
        return Err(invalid_configuration(
            "border",
            &border,
            &"must be an even number",
        ));
    }
    Ok(())
}

/// Carve a connected maze of full-resolution size `(width, height)`
///
/// Every cell inside the `border` margin is left as [`Cell::Wall`]. The result
/// only contains `Wall` and `Open` cells.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the size or border is rejected by
/// [`validate_dimensions`].
pub fn carve_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    border: usize,
    rng: &mut R,
) -> Result<MazeMatrix> {
    validate_dimensions(width, height, border)?;

    let half_border = border / 2;
    let mut maze = carve_backbone(width / 2, height / 2, half_border, rng);
    enforce_border(&mut maze, half_border);
    widen_frontiers(&mut maze, half_border);
    Ok(expand_to_full_resolution(&maze))
}

/// Start cell of the backbone as `[row, col]`
pub const fn backbone_start(half_width: usize, half_height: usize) -> [usize; 2] {
    [half_height / 2, half_width / 2]
}

/// Run the randomized depth-first search on a `(half_height, half_width)` grid
///
/// Nodes sit two steps apart; the cell between a node and its newly discovered
/// neighbor is opened to connect them. Newly discovered nodes are marked
/// `Frontier` and only become `Open` once the search expands from them, so
/// dead ends keep their `Frontier` mark. The start cell is reset to `Frontier`
/// when the search finishes.
///
/// The search never steps into the outer `border` margin, so walling that
/// margin afterwards cannot cut a corridor. A start cell inside the margin
/// leaves the grid solid.
pub fn carve_backbone<R: Rng + ?Sized>(
    half_width: usize,
    half_height: usize,
    border: usize,
    rng: &mut R,
) -> MazeMatrix {
    let mut maze = Array2::from_elem((half_height, half_width), Cell::Wall);
    let start = backbone_start(half_width, half_height);
    if maze.is_empty() || in_border(start, maze.dim(), border) {
        return maze;
    }

    set_cell(&mut maze, start, Cell::Open);

    let mut directions = CARDINAL_DIRECTIONS;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        if !has_unvisited_neighbor(&maze, current, border) {
            stack.pop();
            continue;
        }

        set_cell(&mut maze, current, Cell::Open);
        directions.shuffle(rng);

        for step in directions {
            let Some(next) = two_step_neighbor(&maze, current, step, border) else {
                continue;
            };
            if maze.get(next) != Some(&Cell::Wall) {
                continue;
            }
            if let Some(between) = neighbor_index(current, step, maze.dim()) {
                set_cell(&mut maze, between, Cell::Open);
            }
            set_cell(&mut maze, next, Cell::Frontier);
            stack.push(next);
            break;
        }
    }

    set_cell(&mut maze, start, Cell::Frontier);
    maze
}

/// Force every cell within `border` of the edge to `Wall`
pub fn enforce_border(maze: &mut MazeMatrix, border: usize) {
    let dims = maze.dim();
    for ((row, col), cell) in maze.indexed_iter_mut() {
        if in_border([row, col], dims, border) {
            *cell = Cell::Wall;
        }
    }
}

/// Turn interior `Frontier` cells and their walled 8-neighborhood into `Open`
///
/// Neighbors inside the border margin are never opened.
pub fn widen_frontiers(maze: &mut MazeMatrix, border: usize) {
    let dims = maze.dim();
    for row in 0..dims.0 {
        for col in 0..dims.1 {
            let index = [row, col];
            if in_border(index, dims, border) || maze.get(index) != Some(&Cell::Frontier) {
                continue;
            }

            for step in NEIGHBOR_OFFSETS {
                let Some(neighbor) = neighbor_index(index, step, dims) else {
                    continue;
                };
                if !in_border(neighbor, dims, border) && maze.get(neighbor) == Some(&Cell::Wall) {
                    set_cell(maze, neighbor, Cell::Open);
                }
            }
            set_cell(maze, index, Cell::Open);
        }
    }
}

/// Expand each cell into a 2x2 block of the same value
pub fn expand_to_full_resolution(maze: &MazeMatrix) -> MazeMatrix {
    let (rows, cols) = maze.dim();
    Array2::from_shape_fn((rows * 2, cols * 2), |(row, col)| {
        maze.get([row / 2, col / 2]).copied().unwrap_or_default()
    })
}

fn has_unvisited_neighbor(maze: &MazeMatrix, index: [usize; 2], border: usize) -> bool {
    CARDINAL_DIRECTIONS.into_iter().any(|step| {
        two_step_neighbor(maze, index, step, border)
            .is_some_and(|next| maze.get(next) == Some(&Cell::Wall))
    })
}

/// Node two cells away along `step`, if it lies clear of the border margin
fn two_step_neighbor(
    maze: &MazeMatrix,
    index: [usize; 2],
    step: [i32; 2],
    border: usize,
) -> Option<[usize; 2]> {
    let dims = maze.dim();
    neighbor_index(index, [step[0] * 2, step[1] * 2], dims)
        .filter(|next| !in_border(*next, dims, border))
}

fn set_cell(maze: &mut MazeMatrix, index: [usize; 2], value: Cell) {
    if let Some(cell) = maze.get_mut(index) {
        *cell = value;
    }
}
