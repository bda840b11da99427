//! The camera-facing facade: acquire a frame, then query the surface.
use log::{trace, warn};
use num_traits::Float;

use crate::bicubic::BicubicSampler;
use crate::grid::SampleGrid;
use crate::sensor::ThermalSensor;
use crate::utils::unit_coord;
use crate::{Error, Frame};

/// Continuous temperature field reconstructed from an 8x8 thermal sensor.
///
/// `refresh` takes `&mut self` and the query methods take `&self`, so a
/// query can never observe a half-written grid.
#[derive(Clone, Debug)]
pub struct Interpolator<T, S> {
    sensor: S,
    grid: SampleGrid<T>,
    sampler: BicubicSampler<T>,
    /// Number of frames loaded so far
    frames: u64,
}

impl<T: Float, S: ThermalSensor<T>> Interpolator<T, S> {
    /// Wrap a sensor. The surface reads 0 everywhere until the first
    /// successful [`refresh`](Self::refresh) or [`load`](Self::load).
    ///
    /// # Errors
    /// * If the index scale cannot be represented in `T`
    pub fn new(sensor: S) -> Result<Self, Error> {
        Ok(Self {
            sensor,
            grid: SampleGrid::new(),
            sampler: BicubicSampler::new()?,
            frames: 0,
        })
    }

    /// Acquire one frame from the sensor and rebuild the padded grid.
    ///
    /// Nothing is written unless the acquisition succeeds; on failure the
    /// previous surface stays in place and the sensor's error is returned as-is.
    pub fn refresh(&mut self) -> Result<(), S::Error> {
        let frames = self.frames;
        if let Err(err) = self.sensor.refresh() {
            warn!("sensor acquisition failed, keeping frame {frames}");
            return Err(err);
        }

        let frame = self.sensor.read_frame();
        self.load(&frame);
        Ok(())
    }

    /// Load a frame that was acquired elsewhere, bypassing the sensor.
    pub fn load(&mut self, frame: &Frame<T>) {
        self.grid.load(frame);
        self.frames += 1;
        trace!("loaded thermal frame {}", self.frames);
    }

    /// Temperature at normalized `(r, c)`. Each axis is clamped to `[0, 1]`.
    #[inline]
    pub fn query(&self, r: T, c: T) -> T {
        self.sampler.sample(&self.grid, r, c)
    }

    /// Evaluate the surface at paired coordinates `(rows[i], cols[i])`.
    ///
    /// # Errors
    /// * If `rows`, `cols`, and `out` differ in length
    pub fn query_many(&self, rows: &[T], cols: &[T], out: &mut [T]) -> Result<(), Error> {
        let n = out.len();
        if rows.len() != n || cols.len() != n {
            return Err(Error::DimensionMismatch);
        }

        for i in 0..n {
            out[i] = self.query(rows[i], cols[i]);
        }

        Ok(())
    }

    /// Fill a row-major `nrows x ncols` raster spanning the whole domain,
    /// so the corner pixels sit exactly on the domain's corners.
    ///
    /// # Errors
    /// * If `out.len() != nrows * ncols`
    /// * If a pixel index cannot be represented in `T`
    pub fn render(&self, nrows: usize, ncols: usize, out: &mut [T]) -> Result<(), Error> {
        if nrows.checked_mul(ncols) != Some(out.len()) {
            return Err(Error::DimensionMismatch);
        }

        for i in 0..nrows {
            let r = unit_coord(i, nrows)?;
            for j in 0..ncols {
                out[i * ncols + j] = self.query(r, unit_coord(j, ncols)?);
            }
        }

        Ok(())
    }

    /// Allocating version of [`render`](Self::render).
    ///
    /// # Errors
    /// * If a pixel index cannot be represented in `T`
    #[cfg(feature = "std")]
    pub fn render_alloc(&self, nrows: usize, ncols: usize) -> Result<Vec<T>, Error> {
        use itertools::Itertools;

        let rs = crate::utils::unit_axis::<T>(nrows)?;
        let cs = crate::utils::unit_axis::<T>(ncols)?;
        Ok(rs
            .iter()
            .cartesian_product(cs.iter())
            .map(|(&r, &c)| self.query(r, c))
            .collect())
    }

    /// Number of frames loaded since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The padded grid behind the current surface.
    #[inline]
    pub fn grid(&self) -> &SampleGrid<T> {
        &self.grid
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn into_sensor(self) -> S {
        self.sensor
    }
}
