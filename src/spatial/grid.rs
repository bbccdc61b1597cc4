//! Bounds testing and 2D index arithmetic shared by every grid in the crate
//!
//! Positions handed around the public API are `[x, y]` pairs of `i32`, while
//! `ndarray` matrices are indexed `[row, col]` with `usize`. The helpers here
//! are the only place the two conventions meet.

use num_traits::PrimInt;
use std::ops::Range;

/// Axis-aligned unit steps as `[dx, dy]`: east, west, south, north
pub const CARDINAL_DIRECTIONS: [[i32; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

/// The eight surrounding offsets as `[dx, dy]`
pub const NEIGHBOR_OFFSETS: [[i32; 2]; 8] = [
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

/// Check whether `(x, y)` lies inside `[0, width) x [0, height)`
pub fn is_within_bounds<T: PrimInt>(x: T, y: T, width: T, height: T) -> bool {
    x >= T::zero() && x < width && y >= T::zero() && y < height
}

/// Convert an `[x, y]` position into a `[row, col]` matrix index
///
/// Returns `None` when the position falls outside the grid.
pub fn grid_index(position: [i32; 2], width: usize, height: usize) -> Option<[usize; 2]> {
    let col = usize::try_from(position[0]).ok()?;
    let row = usize::try_from(position[1]).ok()?;
    is_within_bounds(col, row, width, height).then_some([row, col])
}

/// Offset a `[row, col]` index by a `[dx, dy]` step, staying inside `(rows, cols)`
pub fn neighbor_index(
    index: [usize; 2],
    step: [i32; 2],
    dims: (usize, usize),
) -> Option<[usize; 2]> {
    let row = i64::try_from(index[0]).ok()? + i64::from(step[1]);
    let col = i64::try_from(index[1]).ok()? + i64::from(step[0]);
    let rows = i64::try_from(dims.0).ok()?;
    let cols = i64::try_from(dims.1).ok()?;
    if is_within_bounds(col, row, cols, rows) {
        Some([usize::try_from(row).ok()?, usize::try_from(col).ok()?])
    } else {
        None
    }
}

/// Whether a `[row, col]` index lies inside the outer margin of thickness `border`
pub const fn in_border(index: [usize; 2], dims: (usize, usize), border: usize) -> bool {
    index[0] < border
        || index[0] + border >= dims.0
        || index[1] < border
        || index[1] + border >= dims.1
}

/// Get column and row spans for an inclusive square around `center`
///
/// `radius` is `[rx, ry]`. Both ranges are clamped to the grid so callers can
/// iterate them directly; a negative radius yields empty ranges.
pub fn square_spans(
    center: [i32; 2],
    radius: [i32; 2],
    width: usize,
    height: usize,
) -> (Range<usize>, Range<usize>) {
    let clamp_span = |center: i32, radius: i32, limit: usize| -> Range<usize> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let start = (i64::from(center) - i64::from(radius)).clamp(0, limit);
        let end = (i64::from(center) + i64::from(radius) + 1).clamp(0, limit);
        let start = usize::try_from(start).unwrap_or(0);
        let end = usize::try_from(end).unwrap_or(0);
        start..end.max(start)
    };

    (
        clamp_span(center[0], radius[0], width),
        clamp_span(center[1], radius[1], height),
    )
}

/// Convert a pixel coordinate to a tile index (floored)
pub fn pixel_to_tile(pixel: f64, tile_size: u32) -> i32 {
    (pixel / f64::from(tile_size.max(1))).floor() as i32
}

/// Convert a tile index to the pixel coordinate of its top-left corner
pub const fn tile_to_pixel(index: i32, tile_size: u32) -> i32 {
    index * tile_size as i32
}
