use num_traits::{Float, NumCast};

use super::cubic_convolution;
use crate::grid::SampleGrid;
use crate::{Error, INDEX_SCALE, MAX_BASE_INDEX};

/// Separable bicubic evaluation of a fully-populated [`SampleGrid`]
/// over the normalized domain `[0, 1] x [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BicubicSampler<T> {
    /// [`INDEX_SCALE`] converted to the value type
    scale: T,
}

impl<T: Float> BicubicSampler<T> {
    /// # Errors
    /// * If the index scale cannot be represented in `T`
    #[inline]
    pub fn new() -> Result<Self, Error> {
        let scale = <T as NumCast>::from(INDEX_SCALE).ok_or(Error::Unrepresentable)?;
        Ok(Self { scale })
    }

    /// Evaluate the surface at `(r, c)`.
    ///
    /// Coordinates outside `[0, 1]` are clamped per axis; NaN is treated as 0.
    /// The grid's border ring must already be populated.
    #[inline]
    pub fn sample(&self, grid: &SampleGrid<T>, r: T, c: T) -> T {
        let (row, y) = self.locate(r);
        let (col, x) = self.locate(c);

        // Interpolate along each of the four rows, then down the column
        let mut rowvals = [T::zero(); 4];
        for i in 0..4 {
            rowvals[i] = cubic_convolution(grid.window(row + i, col), x);
        }
        cubic_convolution(rowvals, y)
    }

    /// Split a normalized coordinate into the padded index of the first row
    /// (or column) of its 4x4 patch and the fractional offset within the
    /// patch's central cell.
    ///
    /// The base index is in `0..=6` for every input. At `v = 1.0` it is 6
    /// with an offset just under 1, never 7 with an offset of 0.
    #[inline]
    pub fn locate(&self, v: T) -> (usize, T) {
        let scaled = clamp_unit(v) * self.scale;
        let floc = scaled.floor();
        let base = <usize as NumCast>::from(floc).unwrap_or(0);
        debug_assert!(base <= MAX_BASE_INDEX);

        (base, scaled - floc)
    }
}

/// Constrain `v` to `[0, 1]`, mapping NaN to 0.
#[inline(always)]
pub fn clamp_unit<T: Float>(v: T) -> T {
    v.max(T::zero()).min(T::one())
}

#[cfg(test)]
mod test {
    use super::{clamp_unit, BicubicSampler};
    use crate::grid::SampleGrid;
    use crate::testing::*;
    use crate::{INDEX_SCALE, MAX_BASE_INDEX};

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.3_f64), 0.0);
        assert_eq!(clamp_unit(1.5_f64), 1.0);
        assert_eq!(clamp_unit(0.25_f64), 0.25);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f32::INFINITY), 1.0);
        assert_eq!(clamp_unit(f32::NEG_INFINITY), 0.0);
    }

    /// The upper edge of the domain must select the last valid patch
    #[test]
    fn test_upper_boundary_selects_last_patch() {
        let s64 = BicubicSampler::<f64>::new().unwrap();
        let (base, frac) = s64.locate(1.0);
        assert_eq!(base, MAX_BASE_INDEX);
        assert!((frac - 0.99).abs() < 1e-9);

        let s32 = BicubicSampler::<f32>::new().unwrap();
        let (base, frac) = s32.locate(1.0);
        assert_eq!(base, MAX_BASE_INDEX);
        assert!((frac - 0.99).abs() < 1e-4);

        // Clamped inputs land on the same patch
        assert_eq!(s64.locate(7.0), s64.locate(1.0));
        assert_eq!(s64.locate(-2.0), (0, 0.0));
    }

    #[test]
    fn test_base_index_never_exceeds_last_patch() {
        let s64 = BicubicSampler::<f64>::new().unwrap();
        let s32 = BicubicSampler::<f32>::new().unwrap();
        for v in linspace(0.0_f64, 1.0, 10_001) {
            let (base, frac) = s64.locate(v);
            assert!(base <= MAX_BASE_INDEX);
            assert!((0.0..1.0).contains(&frac));

            let (base, frac) = s32.locate(v as f32);
            assert!(base <= MAX_BASE_INDEX);
            assert!((0.0..1.0).contains(&frac));
        }
    }

    /// At the normalized position k / 6.99, the surface returns sensor sample k
    #[test]
    fn test_passes_through_samples() {
        let mut rng = rng_fixed_seed();
        let frame = random_frame(&mut rng, 15.0, 30.0);
        let grid = SampleGrid::from_frame(&frame);
        let sampler = BicubicSampler::<f64>::new().unwrap();

        for row in 0..=MAX_BASE_INDEX {
            for col in 0..=MAX_BASE_INDEX {
                let r = row as f64 / INDEX_SCALE;
                let c = col as f64 / INDEX_SCALE;
                let v = sampler.sample(&grid, r, c);
                assert!((v - frame[row][col]).abs() < 1e-9);
            }
        }
    }

    /// A ramp along the rows is reproduced exactly, including in the
    /// patches that reach into the extrapolated border.
    #[test]
    fn test_linear_ramp_exact() {
        let frame: [[f64; 8]; 8] = core::array::from_fn(|r| [r as f64 * 10.0; 8]);
        let grid = SampleGrid::from_frame(&frame);
        let sampler = BicubicSampler::<f64>::new().unwrap();

        for r in linspace(0.0, 1.0, 32) {
            for c in linspace(0.0, 1.0, 32) {
                let expected = 10.0 * r * INDEX_SCALE;
                let v = sampler.sample(&grid, r, c);
                assert!((v - expected).abs() < 1e-9);
            }
        }
    }

    /// Rows and columns are interchangeable for a transposed frame
    #[test]
    fn test_transpose_symmetry() {
        let mut rng = rng_fixed_seed();
        let frame = random_frame(&mut rng, 0.0, 50.0);
        let transposed: [[f64; 8]; 8] =
            core::array::from_fn(|r| core::array::from_fn(|c| frame[c][r]));
        let a = SampleGrid::from_frame(&frame);
        let b = SampleGrid::from_frame(&transposed);
        let sampler = BicubicSampler::<f64>::new().unwrap();

        for r in linspace(0.0, 1.0, 9) {
            for c in linspace(0.0, 1.0, 9) {
                let va = sampler.sample(&a, r, c);
                let vb = sampler.sample(&b, c, r);
                assert!((va - vb).abs() < 1e-9);
            }
        }
    }
}
