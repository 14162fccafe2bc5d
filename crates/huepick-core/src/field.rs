//! ScalarField - 2D floating-point field
//!
//! `ScalarField` is a 2D array of `f32` values co-indexed with an image,
//! used for saliency maps and other per-pixel scalar quantities.
//!
//! # Examples
//!
//! ```
//! use huepick_core::ScalarField;
//!
//! let mut field = ScalarField::new(100, 100).unwrap();
//! field.set_pixel(10, 20, 0.5);
//! assert_eq!(field.get_pixel(10, 20), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::stats::FieldStats;

/// 2D array of `f32` values, one per pixel
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The value at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone)]
pub struct ScalarField {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Field data (row-major, no padding)
    data: Vec<f32>,
}

impl ScalarField {
    /// Create a new field with all values set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(ScalarField {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create a new field with all values set to `value`
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(ScalarField {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a field from raw data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(ScalarField {
            width,
            height,
            data,
        })
    }

    /// Get the field width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the field height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the field dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the value at (x, y)
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    /// Set the value at (x, y)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize] = value;
    }

    /// View the field data as a flat slice (row-major)
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// View the field data as a mutable flat slice (row-major)
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Minimum value in the field
    pub fn min(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Maximum value in the field
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Arithmetic mean of all values
    pub fn mean(&self) -> f32 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        (sum / self.data.len() as f64) as f32
    }

    /// Apply a function to every value in place
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(f32) -> f32,
    {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Min-max normalize into [0, 1]
    ///
    /// A degenerate (constant) field has no range to stretch; it maps to a
    /// uniform 0.5 instead of dividing by zero.
    pub fn normalized(&self) -> ScalarField {
        let min = self.min();
        let max = self.max();

        let mut out = self.clone();
        if max == min {
            out.map_in_place(|_| 0.5);
        } else {
            let range = max - min;
            out.map_in_place(|v| (v - min) / range);
        }
        out
    }

    /// Summary statistics over the field values
    ///
    /// # Errors
    ///
    /// Never fails for a constructed field; kept as `Result` for parity
    /// with the slice-level statistics helpers.
    pub fn stats(&self) -> Result<FieldStats> {
        FieldStats::from_values(&self.data)
    }
}
