//! The boundary to the thermal sensor driver.
//!
//! The core never talks to a bus. A driver implements [`ThermalSensor`] and
//! is handed to [`crate::Interpolator`], which calls `refresh` once per
//! acquisition cycle and then reads the 64 samples.
use core::convert::Infallible;

use crate::{Frame, SENSOR_COLS, SENSOR_ROWS};

/// A source of 8x8 temperature frames, in Celsius.
///
/// Drivers that report integer temperatures convert to `T` in `sample`.
pub trait ThermalSensor<T> {
    /// Acquisition failure, returned from [`crate::Interpolator::refresh`] unchanged
    type Error;

    /// Acquire one frame. May block for the duration of a bus transfer.
    fn refresh(&mut self) -> Result<(), Self::Error>;

    /// The sample at `(row, col)` in `[0, 7] x [0, 7]` from the most recent
    /// successful `refresh`.
    fn sample(&self, row: usize, col: usize) -> T;

    /// Copy the whole most recent frame.
    #[inline]
    fn read_frame(&self) -> Frame<T> {
        core::array::from_fn(|row| core::array::from_fn(|col| self.sample(row, col)))
    }
}

impl<T, S: ThermalSensor<T> + ?Sized> ThermalSensor<T> for &mut S {
    type Error = S::Error;

    #[inline]
    fn refresh(&mut self) -> Result<(), Self::Error> {
        (**self).refresh()
    }

    #[inline]
    fn sample(&self, row: usize, col: usize) -> T {
        (**self).sample(row, col)
    }
}

/// A sensor that serves a stored frame.
///
/// Useful for replaying captured data, for frames acquired elsewhere
/// (e.g. in a timer callback), and for running without hardware.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSensor<T> {
    frame: Frame<T>,
}

impl<T: Copy> FrameSensor<T> {
    pub fn new(frame: Frame<T>) -> Self {
        Self { frame }
    }

    /// Every sample at the same temperature
    pub fn uniform(value: T) -> Self {
        Self {
            frame: [[value; SENSOR_COLS]; SENSOR_ROWS],
        }
    }

    /// Replace the frame served by the next `refresh`.
    pub fn set_frame(&mut self, frame: Frame<T>) {
        self.frame = frame;
    }

    pub fn frame(&self) -> &Frame<T> {
        &self.frame
    }
}

impl<T: Copy> ThermalSensor<T> for FrameSensor<T> {
    type Error = Infallible;

    #[inline]
    fn refresh(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    #[inline]
    fn sample(&self, row: usize, col: usize) -> T {
        self.frame[row][col]
    }

    #[inline]
    fn read_frame(&self) -> Frame<T> {
        self.frame
    }
}
