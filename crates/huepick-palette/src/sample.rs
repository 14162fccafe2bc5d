//! Candidate sampling
//!
//! Reduces a full image to a pool of candidate colors before
//! selection. The pool is drawn from a mid-saliency percentile band,
//! with two fallbacks when the band is too sparse:
//!
//! 1. Keep only pixels above a single high percentile.
//! 2. Randomly sample from the full image, without replacement.
//!
//! The band deliberately excludes the extremes: the lowest-saliency
//! pixels are usually background, the highest are often specular
//! outliers.

use crate::{PaletteError, PaletteResult};
use huepick_core::{Error, Lab, LabImage, ScalarField, rank_value};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A candidate color with its saliency weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Color in Lab space
    pub lab: Lab,
    /// Saliency weight, [0, 1]
    pub weight: f32,
}

/// Options for candidate sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// Lower percentile bound of the saliency band
    pub band_low: f32,
    /// Upper percentile bound of the saliency band
    pub band_high: f32,
    /// Minimum band population before the percentile fallback kicks in
    pub min_band_candidates: usize,
    /// Percentile threshold used by the first fallback
    pub fallback_rank: f32,
    /// Minimum pool size before the random-sampling fallback kicks in
    pub min_candidates: usize,
    /// Upper bound on the random-sampling pool size
    pub max_random_samples: usize,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        SamplerOptions {
            band_low: 0.20,
            band_high: 0.80,
            min_band_candidates: 250,
            fallback_rank: 0.70,
            min_candidates: 5,
            max_random_samples: 1000,
        }
    }
}

impl SamplerOptions {
    fn validate(&self) -> PaletteResult<()> {
        if !(0.0..=1.0).contains(&self.band_low)
            || !(0.0..=1.0).contains(&self.band_high)
            || self.band_low >= self.band_high
        {
            return Err(PaletteError::InvalidParameters(format!(
                "band percentiles must satisfy 0 <= low < high <= 1, got [{}, {}]",
                self.band_low, self.band_high
            )));
        }
        if !(0.0..=1.0).contains(&self.fallback_rank) {
            return Err(PaletteError::InvalidParameters(format!(
                "fallback_rank must be in [0, 1], got {}",
                self.fallback_rank
            )));
        }
        if self.max_random_samples == 0 {
            return Err(PaletteError::InvalidParameters(
                "max_random_samples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sample candidate colors from an image and its saliency map
///
/// Keeps pixels whose saliency lies strictly inside the
/// `[band_low, band_high]` percentile band. If fewer than
/// `min_band_candidates` remain, falls back to pixels strictly above
/// the `fallback_rank` percentile. If fewer than `min_candidates`
/// remain after that, draws up to `max_random_samples` pixels from the
/// whole image without replacement.
///
/// # Errors
///
/// Fails on mismatched dimensions, invalid options, or when even the
/// random fallback yields no candidates.
pub fn sample_candidates<R: Rng>(
    lab: &LabImage,
    saliency: &ScalarField,
    options: &SamplerOptions,
    rng: &mut R,
) -> PaletteResult<Vec<Candidate>> {
    options.validate()?;
    if lab.dimensions() != saliency.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: lab.dimensions(),
            actual: saliency.dimensions(),
        }
        .into());
    }

    let weights = saliency.as_slice();
    let low = rank_value(weights, options.band_low)?;
    let high = rank_value(weights, options.band_high)?;

    let mut candidates: Vec<Candidate> = lab
        .pixels()
        .zip(weights)
        .filter(|&(_, &w)| w > low && w < high)
        .map(|(lab, &weight)| Candidate { lab, weight })
        .collect();

    if candidates.len() < options.min_band_candidates {
        let threshold = rank_value(weights, options.fallback_rank)?;
        candidates = lab
            .pixels()
            .zip(weights)
            .filter(|&(_, &w)| w > threshold)
            .map(|(lab, &weight)| Candidate { lab, weight })
            .collect();
    }

    if candidates.len() < options.min_candidates {
        let pixels: Vec<Lab> = lab.pixels().collect();
        let amount = options.max_random_samples.min(pixels.len());
        candidates = rand::seq::index::sample(rng, pixels.len(), amount)
            .into_iter()
            .map(|i| Candidate {
                lab: pixels[i],
                weight: weights[i],
            })
            .collect();
    }

    if candidates.is_empty() {
        return Err(PaletteError::NoCandidates);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn ramp_field(width: u32, height: u32) -> (LabImage, ScalarField) {
        let n = (width * height) as usize;
        let weights: Vec<f32> = (0..n).map(|i| i as f32 / (n - 1) as f32).collect();
        let mut lab = LabImage::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                lab.set_pixel(x, y, Lab::new((y * width + x) as f32, 0.0, 0.0));
            }
        }
        let field = ScalarField::from_data(width, height, weights).unwrap();
        (lab, field)
    }

    #[test]
    fn test_band_keeps_mid_saliency_only() {
        // 1000 distinct weights: the 20-80 band keeps roughly 60%
        let (lab, field) = ramp_field(40, 25);
        let opts = SamplerOptions {
            min_band_candidates: 1,
            ..Default::default()
        };
        let pool = sample_candidates(&lab, &field, &opts, &mut rng()).unwrap();
        assert!(pool.len() > 550 && pool.len() < 650, "got {}", pool.len());
        for c in &pool {
            assert!(c.weight > 0.15 && c.weight < 0.85);
        }
    }

    #[test]
    fn test_percentile_fallback_keeps_top_pixels() {
        // 300 zeros and 100 ones: the strict 20-80 band is empty, the
        // fallback keeps exactly the pixels above the 70th percentile.
        let mut weights = vec![0.0f32; 300];
        weights.extend(vec![1.0f32; 100]);
        let field = ScalarField::from_data(20, 20, weights).unwrap();
        let lab = LabImage::new(20, 20).unwrap();
        let pool = sample_candidates(&lab, &field, &SamplerOptions::default(), &mut rng()).unwrap();
        assert_eq!(pool.len(), 100);
        assert!(pool.iter().all(|c| c.weight == 1.0));
    }

    #[test]
    fn test_random_fallback_on_uniform_saliency() {
        // Constant saliency defeats both threshold stages
        let field = ScalarField::new_with_value(30, 30, 0.5).unwrap();
        let lab = LabImage::new(30, 30).unwrap();
        let pool = sample_candidates(&lab, &field, &SamplerOptions::default(), &mut rng()).unwrap();
        assert_eq!(pool.len(), 900);
    }

    #[test]
    fn test_random_fallback_caps_pool_size() {
        let field = ScalarField::new_with_value(50, 50, 0.5).unwrap();
        let lab = LabImage::new(50, 50).unwrap();
        let pool = sample_candidates(&lab, &field, &SamplerOptions::default(), &mut rng()).unwrap();
        assert_eq!(pool.len(), 1000);
    }

    #[test]
    fn test_random_fallback_is_deterministic_per_seed() {
        let (lab, _) = ramp_field(40, 40);
        let field = ScalarField::new_with_value(40, 40, 1.0).unwrap();
        let a = sample_candidates(&lab, &field, &SamplerOptions::default(), &mut rng()).unwrap();
        let b = sample_candidates(&lab, &field, &SamplerOptions::default(), &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let lab = LabImage::new(10, 10).unwrap();
        let field = ScalarField::new(10, 11).unwrap();
        let result = sample_candidates(&lab, &field, &SamplerOptions::default(), &mut rng());
        assert!(matches!(
            result,
            Err(PaletteError::Core(Error::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_invalid_band_rejected() {
        let lab = LabImage::new(4, 4).unwrap();
        let field = ScalarField::new(4, 4).unwrap();
        let opts = SamplerOptions {
            band_low: 0.8,
            band_high: 0.2,
            ..Default::default()
        };
        assert!(sample_candidates(&lab, &field, &opts, &mut rng()).is_err());
    }
}
