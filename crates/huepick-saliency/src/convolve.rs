//! Convolution operations
//!
//! Implements kernel convolution over scalar fields and Lab images.
//! Uses replicate (clamp) border handling: samples outside the image
//! boundary take the value of the nearest edge sample. Results are
//! kept as raw floats; no clamping is applied, so zero-sum kernels
//! (Laplacian) produce signed responses.

use crate::{Kernel, SaliencyResult};
use huepick_core::{Lab, LabImage, ScalarField};

/// Convolve a scalar field with a kernel
pub fn convolve_field(field: &ScalarField, kernel: &Kernel) -> ScalarField {
    let (w, h) = field.dimensions();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    let mut data = Vec::with_capacity((w as usize) * (h as usize));
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x as i32 + (kx as i32 - kcx);
                    let sy = y as i32 + (ky as i32 - kcy);

                    // Clamp to image boundaries (replicate border)
                    let sx = sx.clamp(0, w as i32 - 1) as u32;
                    let sy = sy.clamp(0, h as i32 - 1) as u32;

                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += field.get_pixel(sx, sy) * k;
                }
            }

            data.push(sum);
        }
    }

    // Dimensions are those of the validated input, so this cannot fail
    ScalarField::from_data(w, h, data).unwrap_or_else(|_| field.clone())
}

/// Convolve a Lab image with a kernel, per channel
pub fn convolve_lab(image: &LabImage, kernel: &Kernel) -> LabImage {
    let (w, h) = image.dimensions();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    let mut data = Vec::with_capacity(image.pixel_count() * 3);
    for y in 0..h {
        for x in 0..w {
            let mut sum = [0.0f32; 3];

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x as i32 + (kx as i32 - kcx);
                    let sy = y as i32 + (ky as i32 - kcy);

                    let sx = sx.clamp(0, w as i32 - 1) as u32;
                    let sy = sy.clamp(0, h as i32 - 1) as u32;

                    let px = image.get_pixel(sx, sy);
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum[0] += px.l * k;
                    sum[1] += px.a * k;
                    sum[2] += px.b * k;
                }
            }

            data.extend_from_slice(&sum);
        }
    }

    LabImage::from_data(w, h, data).unwrap_or_else(|_| image.clone())
}

/// Gaussian-smooth a scalar field
///
/// `size` must be odd; a non-positive `sigma` selects the automatic
/// value (see [`Kernel::gaussian`]).
pub fn gaussian_blur_field(field: &ScalarField, size: u32, sigma: f32) -> SaliencyResult<ScalarField> {
    let kernel = Kernel::gaussian(size, sigma)?;
    Ok(convolve_field(field, &kernel))
}

/// Gaussian-smooth a Lab image, per channel
pub fn gaussian_blur_lab(image: &LabImage, size: u32, sigma: f32) -> SaliencyResult<LabImage> {
    let kernel = Kernel::gaussian(size, sigma)?;
    Ok(convolve_lab(image, &kernel))
}
