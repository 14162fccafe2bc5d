//! Convolution kernels
//!
//! Defines the small set of kernel shapes the saliency estimators use:
//! Gaussian smoothing kernels and the 3x3 Laplacian.

use crate::{SaliencyError, SaliencyResult};

/// A 2D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of values, centered at (w/2, h/2)
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> SaliencyResult<Self> {
        if width == 0 || height == 0 {
            return Err(SaliencyError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(SaliencyError::InvalidKernel(format!(
                "kernel data length {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }

        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Create a normalized Gaussian kernel
    ///
    /// `size` must be odd. A non-positive `sigma` selects an automatic
    /// value from the kernel size, `0.3 * ((size - 1) * 0.5 - 1) + 0.8`,
    /// matching the convention the saliency literature implementations
    /// use for their default smoothing.
    pub fn gaussian(size: u32, sigma: f32) -> SaliencyResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(SaliencyError::InvalidKernel(format!(
                "gaussian size must be odd and positive, got {size}"
            )));
        }

        let sigma = if sigma > 0.0 {
            sigma
        } else {
            0.3 * ((size - 1) as f32 * 0.5 - 1.0) + 0.8
        };

        let center = (size / 2) as i32;
        let denom = 2.0 * sigma * sigma;
        let mut data = Vec::with_capacity((size * size) as usize);
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                let dx = (x - center) as f32;
                let dy = (y - center) as f32;
                data.push((-(dx * dx + dy * dy) / denom).exp());
            }
        }

        let mut kernel = Kernel {
            width: size,
            height: size,
            cx: size / 2,
            cy: size / 2,
            data,
        };
        kernel.normalize();
        Ok(kernel)
    }

    /// Create the 3x3 Laplacian kernel
    ///
    /// Second-derivative response; sums to zero.
    pub fn laplacian() -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: vec![0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0],
        }
    }

    /// Get the kernel width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get a value at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the kernel data
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the sum of all kernel values
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Normalize the kernel so that values sum to 1
    ///
    /// A zero-sum kernel (e.g. the Laplacian) is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_sums_to_one() {
        for size in [3u32, 5, 7] {
            let k = Kernel::gaussian(size, 0.0).unwrap();
            assert!((k.sum() - 1.0).abs() < 1e-5, "size {size}");
        }
    }

    #[test]
    fn test_gaussian_peak_at_center() {
        let k = Kernel::gaussian(5, 1.0).unwrap();
        let center = k.get(2, 2).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert!(k.get(x, y).unwrap() <= center);
            }
        }
    }

    #[test]
    fn test_gaussian_even_size_rejected() {
        assert!(Kernel::gaussian(4, 1.0).is_err());
        assert!(Kernel::gaussian(0, 1.0).is_err());
    }

    #[test]
    fn test_laplacian_sums_to_zero() {
        let k = Kernel::laplacian();
        assert!(k.sum().abs() < 1e-6);
        assert_eq!(k.get(1, 1), Some(-4.0));
        assert_eq!((k.center_x(), k.center_y()), (1, 1));
    }

    #[test]
    fn test_from_slice_length_check() {
        assert!(Kernel::from_slice(3, 3, &[0.0; 9]).is_ok());
        assert!(Kernel::from_slice(3, 3, &[0.0; 8]).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let k = Kernel::laplacian();
        assert_eq!(k.get(3, 0), None);
        assert_eq!(k.get(0, 3), None);
    }
}
