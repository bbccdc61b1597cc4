//! Flood-fill reachability over passable maze cells

use crate::algorithm::maze::MazeMatrix;
use crate::spatial::grid::{CARDINAL_DIRECTIONS, neighbor_index};
use bitvec::prelude::*;

/// Count cells an actor could stand in
pub fn passable_count(maze: &MazeMatrix) -> usize {
    maze.iter().filter(|cell| cell.is_passable()).count()
}

/// Mark every passable cell reachable from `start` through axis adjacency
///
/// The returned set is row-major (`row * cols + col`). An impassable or
/// out-of-range start yields an empty set.
pub fn reachable_from(maze: &MazeMatrix, start: [usize; 2]) -> BitVec {
    let dims = maze.dim();
    let mut visited = bitvec![0; dims.0 * dims.1];

    if !maze.get(start).is_some_and(|cell| cell.is_passable()) {
        return visited;
    }

    let flat = |index: [usize; 2]| index[0] * dims.1 + index[1];
    visited.set(flat(start), true);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for step in CARDINAL_DIRECTIONS {
            let Some(next) = neighbor_index(current, step, dims) else {
                continue;
            };
            let seen = visited.get(flat(next)).as_deref() == Some(&true);
            if !seen && maze.get(next).is_some_and(|cell| cell.is_passable()) {
                visited.set(flat(next), true);
                stack.push(next);
            }
        }
    }

    visited
}

/// Number of passable cells reachable from `start`
pub fn reachable_count(maze: &MazeMatrix, start: [usize; 2]) -> usize {
    reachable_from(maze, start).count_ones()
}

/// Whether every passable cell belongs to one region
///
/// A maze without passable cells is trivially connected.
pub fn is_connected(maze: &MazeMatrix) -> bool {
    let first = maze
        .indexed_iter()
        .find(|(_, cell)| cell.is_passable())
        .map(|((row, col), _)| [row, col]);

    first.is_none_or(|start| reachable_count(maze, start) == passable_count(maze))
}
