//! Cellular-automaton relaxation of carved mazes
//!
//! Each iteration reads a snapshot of the previous state, so all flips within
//! an iteration happen simultaneously. Flips are probabilistic: a stop value of
//! `s` lets a qualifying cell flip with probability `(10 - s) / 10`.

use crate::algorithm::maze::{Cell, MazeMatrix};
use crate::io::error::{Result, invalid_configuration};
use crate::math::probability::passes_stop_roll;
use crate::spatial::grid::{NEIGHBOR_OFFSETS, in_border, neighbor_index};
use rand::Rng;

/// Parameters of one smoothing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothingParams {
    /// Number of automaton iterations
    pub iterations: usize,
    /// Resistance of walls to opening up (0 = always, 10 = never)
    pub stop_air: u8,
    /// Resistance of open cells to filling in (0 = always, 10 = never)
    pub stop_wall: u8,
    /// Open neighbors a wall needs before it may open
    pub air_neighbor_threshold: usize,
    /// Wall neighbors an open cell needs before it may fill
    pub wall_neighbor_threshold: usize,
}

impl SmoothingParams {
    /// Check that both stop values lie in 0-10
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first stop value above 10.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("stop_air", self.stop_air), ("stop_wall", self.stop_wall)] {
            if value > 10 {
                return Err(invalid_configuration(
                    parameter,
                    &value,
                    &"must be between 0 and 10",
                ));
            }
        }
        Ok(())
    }
}

/// Wall and open counts over a cell's 8-neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborCounts {
    /// Wall neighbors, including positions outside the grid
    pub walls: usize,
    /// Open neighbors
    pub open: usize,
}

/// Count wall and open neighbors of `[row, col]`
///
/// Neighbors outside the grid count as walls; `Frontier` neighbors count as
/// neither.
pub fn count_neighbors(maze: &MazeMatrix, index: [usize; 2]) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    for step in NEIGHBOR_OFFSETS {
        match neighbor_index(index, step, maze.dim()).and_then(|n| maze.get(n)) {
            None | Some(Cell::Wall) => counts.walls += 1,
            Some(Cell::Open) => counts.open += 1,
            Some(Cell::Frontier) => {}
        }
    }
    counts
}

/// Run a smoothing pass and return the relaxed maze
///
/// Cells inside the `border` margin are never changed.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `params` fails [`SmoothingParams::validate`].
pub fn smooth_maze<R: Rng + ?Sized>(
    maze: &MazeMatrix,
    border: usize,
    params: &SmoothingParams,
    rng: &mut R,
) -> Result<MazeMatrix> {
    params.validate()?;

    let dims = maze.dim();
    let mut current = maze.clone();

    for _ in 0..params.iterations {
        let snapshot = current.clone();

        for ((row, col), cell) in snapshot.indexed_iter() {
            let index = [row, col];
            if in_border(index, dims, border) {
                continue;
            }

            let counts = count_neighbors(&snapshot, index);
            let flipped = match cell {
                Cell::Open if counts.walls >= params.wall_neighbor_threshold => {
                    passes_stop_roll(rng, params.stop_wall).then_some(Cell::Wall)
                }
                Cell::Wall if counts.open >= params.air_neighbor_threshold => {
                    passes_stop_roll(rng, params.stop_air).then_some(Cell::Open)
                }
                _ => None,
            };

            if let (Some(value), Some(target)) = (flipped, current.get_mut(index)) {
                *target = value;
            }
        }
    }

    Ok(current)
}
