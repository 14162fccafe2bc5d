//! Huepick Saliency - Visual saliency estimation
//!
//! This crate estimates how visually prominent each pixel of an image
//! is, producing a [`ScalarField`](huepick_core::ScalarField) in
//! [0, 1] that the palette sampler uses as per-pixel weights.
//!
//! # Examples
//!
//! ```
//! use huepick_core::RgbImage;
//! use huepick_saliency::{SaliencyOptions, combined_saliency};
//!
//! let img = RgbImage::from_fn(32, 32, |x, _| {
//!     if x < 16 { (255, 0, 0) } else { (0, 0, 255) }
//! }).unwrap();
//! let map = combined_saliency(&img, &SaliencyOptions::default()).unwrap();
//! assert_eq!(map.dimensions(), (32, 32));
//! ```

pub mod convolve;
pub mod error;
pub mod estimator;
pub mod kernel;

// Re-export core types
pub use huepick_core;

pub use error::{SaliencyError, SaliencyResult};

pub use convolve::{convolve_field, convolve_lab, gaussian_blur_field, gaussian_blur_lab};
pub use estimator::{SaliencyOptions, combined_saliency, edge_contrast, frequency_tuned};
pub use kernel::Kernel;
