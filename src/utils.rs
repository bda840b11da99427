//! Convenience methods for laying out raster coordinates over the
//! normalized domain.
use num_traits::{Float, NumCast};

use crate::Error;

/// Normalized coordinate of the `i`th of `n` evenly spaced points spanning
/// `[0, 1]`. A single point sits at 0.
///
/// # Errors
/// * If `i` or `n - 1` cannot be represented in `T`
#[inline]
pub fn unit_coord<T: Float>(i: usize, n: usize) -> Result<T, Error> {
    if n <= 1 {
        return Ok(T::zero());
    }
    let num = <T as NumCast>::from(i).ok_or(Error::Unrepresentable)?;
    let den = <T as NumCast>::from(n - 1).ok_or(Error::Unrepresentable)?;
    Ok(num / den)
}

/// Generates `n` evenly spaced coordinates spanning `[0, 1]`,
/// including both endpoints. A single coordinate sits at 0.
///
/// # Errors
/// * If `n - 1` cannot be represented in `T`
#[cfg(feature = "std")]
pub fn unit_axis<T: Float>(n: usize) -> Result<Vec<T>, Error> {
    (0..n).map(|i| unit_coord(i, n)).collect()
}
