//! Selection diversity regression test
//!
//! Verifies the max-min property of greedy selection: on a pool of
//! well-separated color clusters, the greedy pick's minimum pairwise
//! weighted distance is at least that of random same-size subsets.

use huepick_core::Lab;
use huepick_palette::{Candidate, select_candidates};
use huepick_color::weighted_distance;
use huepick_test::RegParams;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn cand(l: f32, a: f32, b: f32, weight: f32) -> Candidate {
    Candidate {
        lab: Lab::new(l, a, b),
        weight,
    }
}

/// Minimum over all ordered pairs of the weighted distance, scaling
/// each distance by the second operand's weight as the selector does.
fn min_pairwise(set: &[Candidate]) -> f32 {
    let mut min = f32::INFINITY;
    for (i, p) in set.iter().enumerate() {
        for (j, q) in set.iter().enumerate() {
            if i != j {
                min = min.min(weighted_distance(p.lab, q.lab, q.weight));
            }
        }
    }
    min
}

#[test]
fn diversity_reg() {
    let mut rp = RegParams::new("diversity");

    // Four corner colors plus a slightly-inward twin of each. The
    // corners are extremal, so the optimal 4-subset is exactly the
    // corner set and greedy must match it.
    let pool = vec![
        cand(50.0, -100.0, -100.0, 1.0),
        cand(50.0, 100.0, -100.0, 1.0),
        cand(50.0, -100.0, 100.0, 1.0),
        cand(50.0, 100.0, 100.0, 1.0),
        cand(50.0, -99.0, -99.0, 0.9),
        cand(50.0, 99.0, -99.0, 0.9),
        cand(50.0, -99.0, 99.0, 0.9),
        cand(50.0, 99.0, 99.0, 0.9),
    ];

    let selected = select_candidates(pool.clone(), 4).unwrap();
    rp.compare_values(4.0, selected.len() as f64, 0.0);

    // Greedy must have taken the four full-weight corners
    let all_corners = selected.iter().all(|c| c.weight == 1.0);
    rp.compare_values(1.0, if all_corners { 1.0 } else { 0.0 }, 0.0);

    let greedy_min = min_pairwise(&selected);
    rp.compare_values(200.0, greedy_min as f64, 0.5);

    // No random 4-subset beats the greedy pick
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..20 {
        let subset: Vec<Candidate> = rand::seq::index::sample(&mut rng, pool.len(), 4)
            .into_iter()
            .map(|i| pool[i])
            .collect();
        let subset_min = min_pairwise(&subset);
        rp.compare_values(
            1.0,
            if greedy_min >= subset_min - 1e-3 { 1.0 } else { 0.0 },
            0.0,
        );
    }

    assert!(rp.cleanup());
}
