//! Greedy farthest-point color selection
//!
//! Picks a small set of colors from a candidate pool so that each new
//! color is as far as possible, in saliency-weighted Lab distance,
//! from everything already picked. Seeding is deterministic: the most
//! salient candidate first, then the candidate farthest from it.

use crate::sample::Candidate;
use crate::{PaletteError, PaletteResult};
use huepick_color::weighted_distance;
use serde::{Deserialize, Serialize};

/// A palette color with its saliency weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Color as 8-bit sRGB
    pub rgb: [u8; 3],
    /// Saliency weight of the source pixel, [0, 1]
    pub weight: f32,
}

impl PaletteEntry {
    /// Lowercase hex representation, e.g. `#ff8800`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// An extracted palette
///
/// Holds up to `requested` entries in selection order. The palette
/// may be shorter than requested when the candidate pool ran out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Selected colors, most salient first
    pub entries: Vec<PaletteEntry>,
    /// Number of colors that was asked for
    pub requested: usize,
}

impl Palette {
    /// Whether the selection produced all requested colors
    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.requested
    }

    /// Number of selected colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette holds no colors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index of the maximum value under `key`, first occurrence on ties
fn argmax_by<T, F>(items: &[T], key: F) -> usize
where
    F: Fn(&T) -> f32,
{
    let mut best = 0;
    let mut best_val = f32::NEG_INFINITY;
    for (i, item) in items.iter().enumerate() {
        let val = key(item);
        if val > best_val {
            best_val = val;
            best = i;
        }
    }
    best
}

/// Select up to `count` diverse colors from the candidate pool
///
/// The first pick is the most salient candidate. The second is the
/// candidate farthest from it. Each following pick maximizes the
/// minimal weighted distance to everything already selected, where
/// each distance is scaled by the selected entry's weight. Picked
/// candidates leave the pool, so the result has no index repeats;
/// selection stops early if the pool runs out.
///
/// # Errors
///
/// Returns `PaletteError::NoCandidates` if the pool is empty.
pub fn select_candidates(
    mut pool: Vec<Candidate>,
    count: usize,
) -> PaletteResult<Vec<Candidate>> {
    if pool.is_empty() {
        return Err(PaletteError::NoCandidates);
    }

    let mut selected = Vec::with_capacity(count);
    if count == 0 {
        return Ok(selected);
    }

    // Most salient candidate seeds the palette
    let first_idx = argmax_by(&pool, |c| c.weight);
    let first = pool.swap_remove(first_idx);
    selected.push(first);

    // Second seed: farthest from the first, scaled by its weight
    if selected.len() < count && !pool.is_empty() {
        let idx = argmax_by(&pool, |c| weighted_distance(c.lab, first.lab, first.weight));
        selected.push(pool.swap_remove(idx));
    }

    // Greedy max-min rounds
    while selected.len() < count && !pool.is_empty() {
        let idx = argmax_by(&pool, |c| {
            selected
                .iter()
                .map(|s| weighted_distance(c.lab, s.lab, s.weight))
                .fold(f32::INFINITY, f32::min)
        });
        selected.push(pool.swap_remove(idx));
    }

    Ok(selected)
}
