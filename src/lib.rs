//! Bicubic reconstruction of 8x8 thermal sensor frames, no-std and no-alloc compatible,
//! for rendering a smooth temperature image at any resolution on memory-constrained devices.
//!
//! Each frame is padded to 10x10 by linear extrapolation of the edges, then
//! evaluated with separable cubic convolution over the normalized domain
//! `[0, 1] x [0, 1]`. The surface passes through every sensor sample and
//! has a continuous first derivative.
//!
//! # Cost
//! | Operation    | RAM                     | Cost                         |
//! |--------------|-------------------------|------------------------------|
//! | `refresh`    | 100 values (owned grid) | one acquisition + 36 border  |
//! | `query`      | 4 values (stack)        | 5 cubic kernels              |
//!
//! # Example
//! ```rust
//! use thermocubic::{FrameSensor, Interpolator};
//!
//! // A warm spot on a 20 degree background
//! let mut frame = [[20.0_f32; 8]; 8];
//! frame[3][4] = 36.0;
//!
//! let mut interp = Interpolator::<f32, _>::new(FrameSensor::new(frame)).unwrap();
//! interp.refresh().unwrap();
//!
//! // Storage for a 32x32 display raster
//! let mut raster = [0.0_f32; 32 * 32];
//! interp.render(32, 32, &mut raster).unwrap();
//!
//! // Sensor sample (row, col) sits at (row / 6.99, col / 6.99)
//! let hot = interp.query(3.0 / 6.99, 4.0 / 6.99);
//! assert!((hot - 36.0).abs() < 1e-3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod bicubic;
pub use bicubic::{cubic_convolution, BicubicSampler};

pub mod error;
pub use error::Error;

pub mod extrapolate;

pub mod grid;
pub use grid::SampleGrid;

pub mod interpolator;
pub use interpolator::Interpolator;

pub mod sensor;
pub use sensor::{FrameSensor, ThermalSensor};

pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

/// Sensor rows
pub const SENSOR_ROWS: usize = 8;

/// Sensor columns
pub const SENSOR_COLS: usize = 8;

/// Padded grid rows, one extrapolated row on each side
pub const PADDED_ROWS: usize = SENSOR_ROWS + 2;

/// Padded grid columns, one extrapolated column on each side
pub const PADDED_COLS: usize = SENSOR_COLS + 2;

/// Number of cells in the padded grid
pub const PADDED_LEN: usize = PADDED_ROWS * PADDED_COLS;

/// Scale from a normalized coordinate to a padded patch index.
///
/// Slightly under `SENSOR_ROWS - 1` so that 1.0 maps into the last patch
/// instead of rounding up to a patch that would run off the grid.
pub const INDEX_SCALE: f64 = 6.99;

/// Largest padded index at which a 4-wide patch can start
pub const MAX_BASE_INDEX: usize = PADDED_COLS - 4;

/// One 8x8 sensor frame, indexed `[row][col]`
pub type Frame<T> = [[T; SENSOR_COLS]; SENSOR_ROWS];
