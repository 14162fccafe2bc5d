//! Numeric statistics helpers
//!
//! Rank-based (percentile) lookups over value slices, plus the summary
//! statistics a diagnostics consumer reads from a saliency field.

use crate::error::{Error, Result};

/// Get the value at a given rank (fractional position) in the sorted values.
///
/// `fract` ranges from 0.0 (minimum) to 1.0 (maximum). The index is
/// computed as `(fract * (n-1) + 0.5) as usize` over a sorted copy,
/// using `f32::total_cmp` for NaN-safe ordering.
pub fn rank_value(values: &[f32], fract: f32) -> Result<f32> {
    let n = values.len();
    if n == 0 {
        return Err(Error::NullInput("empty value slice"));
    }
    if !(0.0..=1.0).contains(&fract) {
        return Err(Error::InvalidParameter(format!(
            "fract {fract} not in [0.0, 1.0]"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);
    let index = (fract * (n - 1) as f32 + 0.5) as usize;
    let index = index.min(n - 1);
    Ok(sorted[index])
}

/// Summary statistics over a value slice
///
/// Gives a diagnostics consumer a cheap distribution overview without
/// handing over the full field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    /// Minimum value
    pub min: f32,
    /// Maximum value
    pub max: f32,
    /// Arithmetic mean
    pub mean: f32,
    /// Population standard deviation
    pub std_dev: f32,
    /// 10th percentile
    pub percentile_10: f32,
    /// 90th percentile
    pub percentile_90: f32,
}

impl FieldStats {
    /// Compute statistics over a slice of values
    ///
    /// # Errors
    ///
    /// Returns `Error::NullInput` for an empty slice.
    pub fn from_values(values: &[f32]) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::NullInput("empty value slice"));
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
        }
        let mean = sum / n as f64;

        let var: f64 = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n as f64;

        Ok(FieldStats {
            min,
            max,
            mean: mean as f32,
            std_dev: var.sqrt() as f32,
            percentile_10: rank_value(values, 0.1)?,
            percentile_90: rank_value(values, 0.9)?,
        })
    }
}
