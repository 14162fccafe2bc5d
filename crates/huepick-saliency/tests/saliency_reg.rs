//! Saliency estimation regression test
//!
//! Exercises the combined saliency map on synthetic images with known
//! structure: uniform fields, isolated color blocks, step edges.

use huepick_core::RgbImage;
use huepick_saliency::{SaliencyOptions, combined_saliency, edge_contrast, frequency_tuned};
use huepick_test::RegParams;

#[test]
fn saliency_reg() {
    let mut rp = RegParams::new("saliency");

    // --- Uniform image: no structure, flat map at 0.5 ---

    let uniform = RgbImage::from_fn(32, 32, |_, _| (90, 140, 40)).unwrap();
    let map = combined_saliency(&uniform, &SaliencyOptions::default()).unwrap();
    rp.compare_values(0.5, map.min() as f64, 1e-6);
    rp.compare_values(0.5, map.max() as f64, 1e-6);

    // --- Output range and dimensions ---

    let noisy = RgbImage::from_fn(48, 36, |x, y| {
        (((x * 37 + y * 11) % 256) as u8, ((x * 5) % 256) as u8, ((y * 7) % 256) as u8)
    })
    .unwrap();
    let map = combined_saliency(&noisy, &SaliencyOptions::default()).unwrap();
    rp.compare_values(48.0, map.width() as f64, 0.0);
    rp.compare_values(36.0, map.height() as f64, 0.0);
    rp.compare_values(0.0, map.min() as f64, 1e-6);
    rp.compare_values(1.0, map.max() as f64, 1e-6);

    // --- A rare color block dominates the frequency-tuned cue ---

    let block = RgbImage::from_fn(40, 40, |x, y| {
        if (16..24).contains(&x) && (16..24).contains(&y) {
            (255, 0, 0)
        } else {
            (128, 128, 128)
        }
    })
    .unwrap();
    let freq = frequency_tuned(&block).unwrap();
    let inside = freq.get_pixel(20, 20);
    let outside = freq.get_pixel(4, 4);
    rp.compare_values(1.0, if inside > outside { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, inside as f64, 0.05);

    // --- The edge cue peaks on the block boundary, not inside it ---

    let edge = edge_contrast(&block).unwrap();
    let boundary = edge.get_pixel(16, 20);
    let interior = edge.get_pixel(20, 20);
    let background = edge.get_pixel(4, 4);
    rp.compare_values(1.0, if boundary > interior { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if boundary > background { 1.0 } else { 0.0 }, 0.0);

    // --- Estimation is deterministic ---

    let again = combined_saliency(&noisy, &SaliencyOptions::default()).unwrap();
    rp.compare_fields(&map, &again, 0.0);

    assert!(rp.cleanup());
}
