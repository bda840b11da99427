//! Bicubic reconstruction on the padded grid.
//!
//! The one-dimensional kernel is cubic convolution: between samples `p1`
//! and `p2` it follows a cubic Hermite segment whose endpoint slopes are
//! centered differences, `(p2 - p0) / 2` at `p1` and `(p3 - p1) / 2` at `p2`.
//! This has a few properties that matter for a thermal image:
//! * The surface passes exactly through every sensor sample
//! * The first derivative is continuous across cell boundaries
//! * Constant, linear, and quadratic data are reproduced exactly
//! * Each output depends on a 4x4 neighborhood only, so evaluation needs
//!   no solved coefficients and no storage beyond the grid itself
//!
//! The two-dimensional sampler in [`sampler`] applies the kernel along four
//! rows and then once down the resulting column.
use num_traits::Float;

pub mod sampler;

pub use sampler::BicubicSampler;

/// Interpolate between `p[1]` and `p[2]` at offset `x`, where the four
/// samples sit at relative positions -1, 0, 1, 2.
///
/// Returns `p[1]` at `x = 0` and `p[2]` at `x = 1`. Offsets outside `[0, 1)`
/// are evaluated on the same polynomial without complaint.
#[inline(always)]
pub fn cubic_convolution<T: Float>(p: [T; 4], x: T) -> T {
    // Construct some constants using generic methods
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let four = two + two;
    let five = four + one;
    let half = one / two;

    let [p0, p1, p2, p3] = p;
    p1 + half
        * x
        * ((p2 - p0)
            + x * ((two * p0 - five * p1 + four * p2 - p3) + x * (three * (p1 - p2) + p3 - p0)))
}
