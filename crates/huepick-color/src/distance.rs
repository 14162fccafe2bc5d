//! Saliency-weighted perceptual distance
//!
//! A cheap weighted-Euclidean approximation of perceptual difference in
//! Lab space. The lightness difference is down-weighted relative to the
//! chroma differences, reflecting that chroma variation dominates the
//! perceptual difference at this level of approximation.

use huepick_core::Lab;

/// Down-weighting applied to the L* difference relative to a*/b*
pub const LIGHTNESS_WEIGHT: f32 = 0.5;

/// Saliency-weighted Lab distance between two samples
///
/// ```text
/// d = weight * sqrt((0.5 * dL)^2 + da^2 + db^2)
/// ```
///
/// The metric is asymmetric by construction: only `weight` (the
/// saliency of the *first* sample's side of the comparison) scales the
/// result, so `weighted_distance(p, q, w_p)` differs from
/// `weighted_distance(q, p, w_q)` whenever the weights differ. Callers
/// must be consistent about argument order.
#[inline]
pub fn weighted_distance(p: Lab, q: Lab, weight: f32) -> f32 {
    let dl = (p.l - q.l) * LIGHTNESS_WEIGHT;
    let da = p.a - q.a;
    let db = p.b - q.b;
    weight * (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_same_point() {
        let p = Lab::new(50.0, 10.0, -10.0);
        assert_eq!(weighted_distance(p, p, 1.0), 0.0);
    }

    #[test]
    fn test_weight_scales_linearly() {
        let p = Lab::new(50.0, 0.0, 0.0);
        let q = Lab::new(60.0, 5.0, -5.0);
        let d1 = weighted_distance(p, q, 1.0);
        let d2 = weighted_distance(p, q, 2.0);
        assert!((d2 - 2.0 * d1).abs() < 1e-5);
    }

    #[test]
    fn test_lightness_down_weighted() {
        let base = Lab::new(50.0, 0.0, 0.0);
        let dl = weighted_distance(base, Lab::new(60.0, 0.0, 0.0), 1.0);
        let da = weighted_distance(base, Lab::new(50.0, 10.0, 0.0), 1.0);
        // Equal raw deltas: the lightness-only distance is half the chroma one
        assert!((da - 2.0 * dl).abs() < 1e-4);
    }

    #[test]
    fn test_asymmetric_when_weights_differ() {
        let p = Lab::new(20.0, 30.0, 40.0);
        let q = Lab::new(70.0, -30.0, -40.0);
        let forward = weighted_distance(p, q, 0.25);
        let backward = weighted_distance(q, p, 0.75);
        assert!((forward - backward).abs() > 1.0);
        // ... and symmetric only when the same weight is passed both ways
        let same = weighted_distance(q, p, 0.25);
        assert!((forward - same).abs() < 1e-5);
    }
}
