//! Huepick Palette - Saliency-weighted palette extraction
//!
//! This crate turns an image and its saliency map into a small palette
//! of diverse, visually prominent colors:
//!
//! 1. **Sampling** ([`sample`]): keep a pool of candidate pixels from
//!    a mid-saliency percentile band, with fallbacks for degenerate
//!    saliency distributions
//! 2. **Selection** ([`select`]): greedy farthest-point picking in
//!    saliency-weighted Lab space
//!
//! # Examples
//!
//! ```
//! use huepick_core::{RgbImage, ScalarField};
//! use huepick_palette::{ExtractOptions, extract_palette};
//!
//! let img = RgbImage::from_fn(64, 64, |x, y| {
//!     ((x * 4) as u8, (y * 4) as u8, 128)
//! }).unwrap();
//! let saliency = ScalarField::new_with_value(64, 64, 0.5).unwrap();
//!
//! let options = ExtractOptions { seed: Some(42), ..Default::default() };
//! let palette = extract_palette(&img, &saliency, &options).unwrap();
//! assert_eq!(palette.requested, 5);
//! ```

pub mod error;
pub mod sample;
pub mod select;

// Re-export core types
pub use huepick_core;

pub use error::{PaletteError, PaletteResult};
pub use sample::{Candidate, SamplerOptions, sample_candidates};
pub use select::{Palette, PaletteEntry, select_candidates};

use huepick_color::{lab_to_rgb, to_lab};
use huepick_core::{Error, RgbImage, ScalarField};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Options for palette extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Number of colors to extract
    pub palette_size: usize,
    /// Candidate sampling parameters
    pub sampler: SamplerOptions,
    /// Seed for the random-sampling fallback; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            palette_size: 5,
            sampler: SamplerOptions::default(),
            seed: None,
        }
    }
}

/// Extract a palette from an image and its saliency map
///
/// Converts the image to Lab, samples a candidate pool weighted by
/// saliency and greedily selects `palette_size` diverse colors. The
/// resulting entries are in selection order, most salient first, and
/// converted back to 8-bit sRGB through the clipped Lab encoding.
///
/// # Errors
///
/// Fails when the saliency map's dimensions don't match the image,
/// when options are invalid, or when no candidates can be sampled.
pub fn extract_palette(
    image: &RgbImage,
    saliency: &ScalarField,
    options: &ExtractOptions,
) -> PaletteResult<Palette> {
    if image.dimensions() != saliency.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: image.dimensions(),
            actual: saliency.dimensions(),
        }
        .into());
    }

    let lab = to_lab(image)?;
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let candidates = sample_candidates(&lab, saliency, &options.sampler, &mut rng)?;
    let selected = select_candidates(candidates, options.palette_size)?;

    let entries = selected
        .iter()
        .map(|c| {
            let (r, g, b) = lab_to_rgb(c.lab);
            PaletteEntry {
                rgb: [r, g, b],
                weight: c.weight,
            }
        })
        .collect();

    Ok(Palette {
        entries,
        requested: options.palette_size,
    })
}
