//! Linear extrapolation of the padded grid's border ring.
//!
//! Each border cell is continued from the two nearest interior cells along
//! its direction of extrapolation as `2a - b`, where `a` is the nearest
//! and `b` the next-nearest. Only interior cells are read, so an error in
//! one border cell never feeds into another.
use num_traits::Float;

use crate::grid::SampleGrid;
use crate::{PADDED_COLS, PADDED_ROWS};

/// Fill all 36 border cells of `grid` from its interior.
///
/// Corners first (diagonally), then the left and right columns, then the
/// top and bottom rows.
pub fn extrapolate_edges<T: Float>(grid: &mut SampleGrid<T>) {
    let last_row = PADDED_ROWS - 1;
    let last_col = PADDED_COLS - 1;

    // Corners, along the diagonal into the interior
    grid[(0, 0)] = continue_line(grid[(1, 1)], grid[(2, 2)]);
    grid[(0, last_col)] = continue_line(grid[(1, last_col - 1)], grid[(2, last_col - 2)]);
    grid[(last_row, 0)] = continue_line(grid[(last_row - 1, 1)], grid[(last_row - 2, 2)]);
    grid[(last_row, last_col)] = continue_line(
        grid[(last_row - 1, last_col - 1)],
        grid[(last_row - 2, last_col - 2)],
    );

    // Left and right columns
    for row in 1..last_row {
        grid[(row, 0)] = continue_line(grid[(row, 1)], grid[(row, 2)]);
        grid[(row, last_col)] = continue_line(grid[(row, last_col - 1)], grid[(row, last_col - 2)]);
    }

    // Top and bottom rows
    for col in 1..last_col {
        grid[(0, col)] = continue_line(grid[(1, col)], grid[(2, col)]);
        grid[(last_row, col)] = continue_line(grid[(last_row - 1, col)], grid[(last_row - 2, col)]);
    }
}

/// One step past `a` on the line through `b` and `a`.
#[inline(always)]
fn continue_line<T: Float>(a: T, b: T) -> T {
    (a + a) - b
}
