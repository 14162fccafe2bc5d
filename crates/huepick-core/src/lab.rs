//! CIE L*a*b* pixel and image types
//!
//! `Lab` is a single color sample; `LabImage` is a dense, row-major
//! array of `f32` Lab triples with the same spatial layout as
//! [`RgbImage`](crate::RgbImage).
//!
//! Ranges follow the standard CIE convention: L* in [0, 100],
//! a* and b* nominally in [-128, 127].

use crate::error::{Error, Result};

/// CIE L*a*b* color sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, [0, 100]
    pub l: f32,
    /// Green-red axis, nominally [-128, 127]
    pub a: f32,
    /// Blue-yellow axis, nominally [-128, 127]
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// Floating-point Lab image
///
/// # Memory Layout
///
/// Data is stored in row-major order as interleaved `[l, a, b]` triples.
/// The pixel at (x, y) starts at index `3 * (y * width + x)`.
#[derive(Debug, Clone)]
pub struct LabImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, interleaved Lab)
    data: Vec<f32>,
}

impl LabImage {
    /// Create a new image with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * 3;
        Ok(LabImage {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create an image from raw interleaved Lab data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't equal `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x3 = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(LabImage {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the Lab sample at (x, y)
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Lab {
        debug_assert!(x < self.width && y < self.height);
        let i = 3 * ((y * self.width + x) as usize);
        Lab::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the Lab sample at (x, y)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, lab: Lab) {
        debug_assert!(x < self.width && y < self.height);
        let i = 3 * ((y * self.width + x) as usize);
        self.data[i] = lab.l;
        self.data[i + 1] = lab.a;
        self.data[i + 2] = lab.b;
    }

    /// Get the raw interleaved Lab data
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Iterate over all samples in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Lab> + '_ {
        self.data
            .chunks_exact(3)
            .map(|px| Lab::new(px[0], px[1], px[2]))
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Arithmetic mean of all samples, per channel
    ///
    /// # Errors
    ///
    /// Never fails for a constructed image; kept as `Result` for parity
    /// with the scalar-field statistics.
    pub fn mean_color(&self) -> Result<Lab> {
        let n = self.pixel_count();
        if n == 0 {
            return Err(Error::NullInput("empty LabImage"));
        }
        let mut sum = [0.0f64; 3];
        for px in self.data.chunks_exact(3) {
            sum[0] += px[0] as f64;
            sum[1] += px[1] as f64;
            sum[2] += px[2] as f64;
        }
        let n = n as f64;
        Ok(Lab::new(
            (sum[0] / n) as f32,
            (sum[1] / n) as f32,
            (sum[2] / n) as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let img = LabImage::new(3, 2).unwrap();
        assert_eq!(img.get_pixel(2, 1), Lab::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(LabImage::new(0, 1).is_err());
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut img = LabImage::new(4, 4).unwrap();
        img.set_pixel(1, 3, Lab::new(50.0, -20.0, 30.0));
        assert_eq!(img.get_pixel(1, 3), Lab::new(50.0, -20.0, 30.0));
    }

    #[test]
    fn test_mean_color() {
        let mut img = LabImage::new(2, 1).unwrap();
        img.set_pixel(0, 0, Lab::new(0.0, -10.0, 20.0));
        img.set_pixel(1, 0, Lab::new(100.0, 10.0, 40.0));
        let mean = img.mean_color().unwrap();
        assert!((mean.l - 50.0).abs() < 1e-5);
        assert!(mean.a.abs() < 1e-5);
        assert!((mean.b - 30.0).abs() < 1e-5);
    }
}
