//! Padded sample storage.
//!
//! The sensor's 8x8 frame is stored with a one-cell border on every side,
//! giving a 10x10 row-major grid. Sensor sample `(row, col)` lives at padded
//! index `(row + 1, col + 1)`; the border ring is filled by
//! [`crate::extrapolate::extrapolate_edges`] so that every sensor sample has
//! the four neighbors the cubic kernel needs along each axis.
use core::ops::{Index, IndexMut};

use num_traits::Float;

use crate::extrapolate::extrapolate_edges;
use crate::{Error, Frame, PADDED_COLS, PADDED_LEN, PADDED_ROWS, SENSOR_COLS, SENSOR_ROWS};

/// Fixed-size 10x10 padded grid of temperatures, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleGrid<T> {
    vals: [T; PADDED_LEN],
}

impl<T: Float> Default for SampleGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SampleGrid<T> {
    /// An all-zero grid.
    pub fn new() -> Self {
        Self {
            vals: [T::zero(); PADDED_LEN],
        }
    }

    /// Build a fully-populated grid from a sensor frame.
    pub fn from_frame(frame: &Frame<T>) -> Self {
        let mut grid = Self::new();
        grid.load(frame);
        grid
    }

    /// Read one padded cell.
    ///
    /// # Errors
    /// * If either index is outside `[0, 9]`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, Error> {
        let i = checked_idx(row, col)?;
        Ok(self.vals[i])
    }

    /// Write one padded cell.
    ///
    /// # Errors
    /// * If either index is outside `[0, 9]`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), Error> {
        let i = checked_idx(row, col)?;
        self.vals[i] = value;
        Ok(())
    }

    /// Read a sensor sample by its native index in `[0, 7] x [0, 7]`.
    ///
    /// # Errors
    /// * If either index is outside the sensor's span
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> Result<T, Error> {
        if row >= SENSOR_ROWS || col >= SENSOR_COLS {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(self[(row + 1, col + 1)])
    }

    /// Write a full sensor frame into the interior, then rebuild the border.
    ///
    /// The interior is always complete before extrapolation starts, so border
    /// values are derived from the new frame only.
    pub fn load(&mut self, frame: &Frame<T>) {
        for (row, line) in frame.iter().enumerate() {
            let start = (row + 1) * PADDED_COLS + 1;
            self.vals[start..start + SENSOR_COLS].copy_from_slice(line);
        }
        extrapolate_edges(self);
    }

    /// Row-major view of all 100 cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vals
    }

    /// Four consecutive cells of one row, starting at `(row, col)`.
    ///
    /// Callers guarantee `row < 10` and `col <= 6`.
    #[inline(always)]
    pub(crate) fn window(&self, row: usize, col: usize) -> [T; 4] {
        let i = row * PADDED_COLS + col;
        [
            self.vals[i],
            self.vals[i + 1],
            self.vals[i + 2],
            self.vals[i + 3],
        ]
    }
}

impl<T> Index<(usize, usize)> for SampleGrid<T> {
    type Output = T;

    /// # Panics
    /// * If either index is outside `[0, 9]`
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert_in_bounds(row, col);
        &self.vals[row * PADDED_COLS + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SampleGrid<T> {
    /// # Panics
    /// * If either index is outside `[0, 9]`
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert_in_bounds(row, col);
        &mut self.vals[row * PADDED_COLS + col]
    }
}

#[inline(always)]
fn checked_idx(row: usize, col: usize) -> Result<usize, Error> {
    if row >= PADDED_ROWS || col >= PADDED_COLS {
        return Err(Error::OutOfBounds { row, col });
    }
    Ok(row * PADDED_COLS + col)
}

// A column past the edge would otherwise alias into the next row.
#[inline(always)]
fn assert_in_bounds(row: usize, col: usize) {
    assert!(
        row < PADDED_ROWS && col < PADDED_COLS,
        "grid index ({row}, {col}) is outside the padded grid"
    );
}
