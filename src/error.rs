//! Error type shared by the grid, the sampler, and the batch query methods.
//!
//! Sensor failures are not represented here; they are the sensor's own
//! error type and are returned from [`crate::Interpolator::refresh`] unchanged.

/// Errors returned by checked grid access and batch evaluation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A raw grid index outside the padded 10x10 grid.
    #[error("grid index ({row}, {col}) is outside the padded grid")]
    OutOfBounds { row: usize, col: usize },
    /// Coordinate and output slices of different lengths.
    #[error("dimension mismatch")]
    DimensionMismatch,
    /// A constant that the value type cannot represent.
    #[error("unrepresentable constant for this value type")]
    Unrepresentable,
}
