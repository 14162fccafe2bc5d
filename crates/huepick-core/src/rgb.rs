//! 8-bit RGB image container
//!
//! `RgbImage` is the input type for the extraction pipeline: a dense,
//! row-major array of 8-bit RGB triples with no padding and no alpha.

use crate::error::{Error, Result};

/// 8-bit RGB image
///
/// # Memory Layout
///
/// Data is stored in row-major order as interleaved `[r, g, b]` triples.
/// The pixel at (x, y) starts at index `3 * (y * width + x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, interleaved RGB)
    data: Vec<u8>,
}

impl RgbImage {
    /// Create a new image with all pixels set to black
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick_core::RgbImage;
    ///
    /// let img = RgbImage::new(640, 480).unwrap();
    /// assert_eq!(img.dimensions(), (640, 480));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * 3;
        Ok(RgbImage {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Create an image from raw interleaved RGB data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't equal `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
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

        Ok(RgbImage {
            width,
            height,
            data,
        })
    }

    /// Create an image by evaluating a function at every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> (u8, u8, u8),
    {
        let mut img = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = f(x, y);
                img.set_pixel(x, y, r, g, b);
            }
        }
        Ok(img)
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

    /// Get the RGB triple at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height);
        let i = 3 * ((y * self.width + x) as usize);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the RGB triple at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        debug_assert!(x < self.width && y < self.height);
        let i = 3 * ((y * self.width + x) as usize);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Get the raw interleaved RGB data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return the raw interleaved RGB data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data
            .chunks_exact(3)
            .map(|px| (px[0], px[1], px[2]))
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
