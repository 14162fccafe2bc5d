//! Saliency estimation
//!
//! Two complementary per-pixel saliency cues, blended into one map:
//!
//! - **Frequency-tuned** ([`frequency_tuned`]): distance of each
//!   (smoothed) Lab pixel from the global mean color. Large uniform
//!   regions score low, rare colors score high.
//! - **Edge contrast** ([`edge_contrast`]): magnitude of the Laplacian
//!   of the smoothed grayscale image. Busy, structured regions score
//!   high.
//!
//! [`combined_saliency`] averages the two normalized cues, smooths the
//! blend and renormalizes, yielding values in [0, 1].

use crate::convolve::{convolve_field, gaussian_blur_field, gaussian_blur_lab};
use crate::{Kernel, SaliencyError, SaliencyResult};
use huepick_color::{to_gray, to_lab};
use huepick_core::{RgbImage, ScalarField};
use serde::{Deserialize, Serialize};

/// Smoothing kernel size for the frequency-tuned estimator
const FREQ_BLUR_SIZE: u32 = 5;
/// Smoothing kernel size applied to grayscale before the Laplacian
const EDGE_BLUR_SIZE: u32 = 3;
/// Smoothing kernel size applied to the blended map
const BLEND_BLUR_SIZE: u32 = 5;

/// Options for combined saliency estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaliencyOptions {
    /// Weight of the edge-contrast cue in the blend, [0, 1].
    /// The frequency-tuned cue gets the complementary weight.
    pub blend_weight: f32,
}

impl Default for SaliencyOptions {
    fn default() -> Self {
        SaliencyOptions { blend_weight: 0.5 }
    }
}

impl SaliencyOptions {
    fn validate(&self) -> SaliencyResult<()> {
        if !(0.0..=1.0).contains(&self.blend_weight) {
            return Err(SaliencyError::InvalidParameters(format!(
                "blend_weight must be in [0, 1], got {}",
                self.blend_weight
            )));
        }
        Ok(())
    }
}

/// Frequency-tuned saliency
///
/// Converts to Lab, smooths with a Gaussian, then measures each
/// pixel's Euclidean distance from the image's mean Lab color.
/// The result is min-max normalized into [0, 1].
pub fn frequency_tuned(image: &RgbImage) -> SaliencyResult<ScalarField> {
    let lab = to_lab(image)?;
    let mean = lab.mean_color()?;
    let blurred = gaussian_blur_lab(&lab, FREQ_BLUR_SIZE, 0.0)?;

    let (w, h) = blurred.dimensions();
    let mut data = Vec::with_capacity(blurred.pixel_count());
    for px in blurred.pixels() {
        let dl = px.l - mean.l;
        let da = px.a - mean.a;
        let db = px.b - mean.b;
        data.push((dl * dl + da * da + db * db).sqrt());
    }

    let field = ScalarField::from_data(w, h, data)?;
    Ok(field.normalized())
}

/// Edge-contrast saliency
///
/// Converts to grayscale, smooths lightly, then takes the absolute
/// Laplacian response. The result is min-max normalized into [0, 1].
pub fn edge_contrast(image: &RgbImage) -> SaliencyResult<ScalarField> {
    let gray = to_gray(image)?;
    let smoothed = gaussian_blur_field(&gray, EDGE_BLUR_SIZE, 0.0)?;
    let mut edges = convolve_field(&smoothed, &Kernel::laplacian());
    edges.map_in_place(f32::abs);
    Ok(edges.normalized())
}

/// Combined saliency map
///
/// Blends the normalized frequency-tuned and edge-contrast cues
/// according to `options.blend_weight`, smooths the blend with a
/// Gaussian and renormalizes. Output values lie in [0, 1] and the
/// field has the same dimensions as the input image.
pub fn combined_saliency(
    image: &RgbImage,
    options: &SaliencyOptions,
) -> SaliencyResult<ScalarField> {
    options.validate()?;

    let freq = frequency_tuned(image)?;
    let edge = edge_contrast(image)?;

    let we = options.blend_weight;
    let wf = 1.0 - we;
    let (w, h) = freq.dimensions();
    let data: Vec<f32> = freq
        .as_slice()
        .iter()
        .zip(edge.as_slice())
        .map(|(&f, &e)| wf * f + we * e)
        .collect();

    let blended = ScalarField::from_data(w, h, data)?;
    let smoothed = gaussian_blur_field(&blended, BLEND_BLUR_SIZE, 0.0)?;
    Ok(smoothed.normalized())
}
